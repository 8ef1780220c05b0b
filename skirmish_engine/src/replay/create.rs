//! `replay::create` module
//!
//! Handlers for `Create character` and `Create item` commands.

use log::info;

use crate::character::Role;
use crate::error::GameError;
use crate::item::Item;
use crate::session::Session;
use crate::transcript::{Event, Transcript};
use crate::world::WorldObject;

/// Adds a new character to the roster.
///
/// # Errors
/// - `DuplicateCharacterName`, `IllegalHealthValue`
pub fn create_character_handler(
    session: &mut Session,
    transcript: &mut Transcript,
    role: Role,
    name: &str,
    initial_hp: i32,
) -> Result<(), GameError> {
    session.create_character(role, name, initial_hp)?;
    transcript.push(Event::CharacterCreated {
        role,
        name: name.to_string(),
    });
    Ok(())
}

/// Creates a weapon and gives it to its owner.
///
/// # Errors
/// - `CharacterDoesNotExist`, `IllegalDamageValue`, `IllegalItemType`, `FullContainer`,
///   `DuplicateItemName`
pub fn create_weapon_handler(
    session: &mut Session,
    transcript: &mut Transcript,
    owner: &str,
    name: &str,
    damage: i32,
) -> Result<(), GameError> {
    let owner_id = session.character_by_name(owner)?.id();
    let weapon = Item::weapon(owner_id, name, damage)?;
    grant(session, transcript, owner, weapon)
}

/// Creates a potion and gives it to its owner.
///
/// # Errors
/// - `CharacterDoesNotExist`, `IllegalHealthValue`, `IllegalItemType`, `FullContainer`,
///   `DuplicateItemName`
pub fn create_potion_handler(
    session: &mut Session,
    transcript: &mut Transcript,
    owner: &str,
    name: &str,
    heal_value: i32,
) -> Result<(), GameError> {
    let owner_id = session.character_by_name(owner)?.id();
    let potion = Item::potion(owner_id, name, heal_value)?;
    grant(session, transcript, owner, potion)
}

/// Creates a spell restricted to the named targets and gives it to its owner.
///
/// Every target must be a living character at creation time.
///
/// # Errors
/// - `CharacterDoesNotExist` for the owner or any target, `IllegalItemType`,
///   `FullContainer`, `DuplicateItemName`
pub fn create_spell_handler(
    session: &mut Session,
    transcript: &mut Transcript,
    owner: &str,
    name: &str,
    targets: &[String],
) -> Result<(), GameError> {
    let owner_id = session.character_by_name(owner)?.id();
    let allowed_targets = session.resolve_targets(targets)?;
    let spell = Item::spell(owner_id, name, allowed_targets);
    grant(session, transcript, owner, spell)
}

fn grant(session: &mut Session, transcript: &mut Transcript, owner: &str, item: Item) -> Result<(), GameError> {
    let category = item.category();
    let item_name = item.name().to_string();
    let id = session.grant_item(item)?;
    info!("{owner} now holds {category} '{item_name}' ({id})");
    transcript.push(Event::ItemObtained {
        owner: owner.to_string(),
        category,
        item: item_name,
    });
    Ok(())
}
