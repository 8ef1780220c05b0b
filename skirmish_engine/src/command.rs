//! Command module
//!
//! Describes the commands a script can contain and turns a script line into one.
use variantly::Variantly;

use crate::character::Role;
use crate::error::ParseError;
use crate::item::ItemCategory;

/// Commands that can appear in a script.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    CreateCharacter {
        role: Role,
        name: String,
        initial_hp: i32,
    },
    CreateWeapon {
        owner: String,
        name: String,
        damage: i32,
    },
    CreatePotion {
        owner: String,
        name: String,
        heal_value: i32,
    },
    CreateSpell {
        owner: String,
        name: String,
        targets: Vec<String>,
    },
    Attack {
        attacker: String,
        target: String,
        weapon: String,
    },
    Cast {
        caster: String,
        target: String,
        spell: String,
    },
    Drink {
        supplier: String,
        drinker: String,
        potion: String,
    },
    Dialogue {
        speaker: String,
        words: Vec<String>,
    },
    ShowCharacters,
    ShowItems {
        owner: String,
        category: ItemCategory,
    },
}

/// Parses one script line into a `Command`.
///
/// `line` is the 1-based line number, used only for error reporting.
///
/// # Errors
/// - `UnknownCommand` if the words match no command shape
/// - `NotAnInteger` if a numeric operand does not parse
/// - `CountMismatch` if a declared count disagrees with the trailing operands
pub fn parse_command(line: usize, input: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let unknown = || ParseError::UnknownCommand {
        line,
        input: input.trim().to_string(),
    };
    let command = match words.as_slice() {
        ["Create", "character", role, name, hp] => Command::CreateCharacter {
            role: Role::from_key(role).ok_or_else(unknown)?,
            name: (*name).to_string(),
            initial_hp: parse_int(line, hp)?,
        },
        ["Create", "item", "weapon", owner, name, damage] => Command::CreateWeapon {
            owner: (*owner).to_string(),
            name: (*name).to_string(),
            damage: parse_int(line, damage)?,
        },
        ["Create", "item", "potion", owner, name, heal] => Command::CreatePotion {
            owner: (*owner).to_string(),
            name: (*name).to_string(),
            heal_value: parse_int(line, heal)?,
        },
        ["Create", "item", "spell", owner, name, count, targets @ ..] => Command::CreateSpell {
            owner: (*owner).to_string(),
            name: (*name).to_string(),
            targets: counted(line, count, targets)?,
        },
        ["Attack", attacker, target, weapon] => Command::Attack {
            attacker: (*attacker).to_string(),
            target: (*target).to_string(),
            weapon: (*weapon).to_string(),
        },
        ["Cast", caster, target, spell] => Command::Cast {
            caster: (*caster).to_string(),
            target: (*target).to_string(),
            spell: (*spell).to_string(),
        },
        ["Drink", supplier, drinker, potion] => Command::Drink {
            supplier: (*supplier).to_string(),
            drinker: (*drinker).to_string(),
            potion: (*potion).to_string(),
        },
        ["Dialogue", speaker, count, words @ ..] => Command::Dialogue {
            speaker: (*speaker).to_string(),
            words: counted(line, count, words)?,
        },
        ["Show", "characters"] => Command::ShowCharacters,
        ["Show", kind, owner] => Command::ShowItems {
            owner: (*owner).to_string(),
            category: parse_category(kind).ok_or_else(unknown)?,
        },
        _ => return Err(unknown()),
    };
    Ok(command)
}

/// Takes the plural item word used by `Show` and returns the matching category, if any.
pub fn parse_category(word: &str) -> Option<ItemCategory> {
    match word {
        "weapons" => Some(ItemCategory::Weapon),
        "potions" => Some(ItemCategory::Potion),
        "spells" => Some(ItemCategory::Spell),
        _ => None,
    }
}

fn parse_int(line: usize, word: &str) -> Result<i32, ParseError> {
    word.parse().map_err(|_| ParseError::NotAnInteger {
        line,
        found: word.to_string(),
    })
}

/// Checks that `count` matches the number of trailing operands and collects them.
fn counted(line: usize, count: &str, rest: &[&str]) -> Result<Vec<String>, ParseError> {
    let declared = parse_int(line, count)?;
    if usize::try_from(declared).ok() != Some(rest.len()) {
        return Err(ParseError::CountMismatch {
            line,
            declared,
            found: rest.len(),
        });
    }
    Ok(rest.iter().map(|w| (*w).to_string()).collect())
}
