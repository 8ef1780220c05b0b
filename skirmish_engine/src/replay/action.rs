//! `replay::action` module
//!
//! Handlers for commands where one character uses an item on another: `Attack`, `Cast`
//! and `Drink`.

use log::info;

use crate::error::GameError;
use crate::idgen::Id;
use crate::item::ItemCategory;
use crate::session::{Session, UseOutcome};
use crate::transcript::{Event, Transcript};
use crate::world::WorldObject;

/// Looks up the user, the target and the user's item of `category` named `item`.
fn resolve(
    session: &Session,
    user: &str,
    target: &str,
    category: ItemCategory,
    item: &str,
) -> Result<(Id, Id, Id), GameError> {
    let user_ref = session.character_by_name(user)?;
    let target_id = session.character_by_name(target)?.id();
    let item_id = user_ref.held_item(category, item)?;
    Ok((user_ref.id(), target_id, item_id))
}

fn report_death(transcript: &mut Transcript, target: &str, outcome: UseOutcome) {
    if outcome.target_state.is_dead() {
        info!("{target} has died");
        transcript.push(Event::Death(target.to_string()));
    }
}

/// `attacker` hits `target` with one of its weapons.
///
/// # Errors
/// - `CharacterDoesNotExist` if either character is missing
/// - `IllegalItemType` if the attacker cannot carry weapons
/// - `ElementNotFound` if the attacker holds no such weapon
pub fn attack_handler(
    session: &mut Session,
    transcript: &mut Transcript,
    attacker: &str,
    target: &str,
    weapon: &str,
) -> Result<(), GameError> {
    let (attacker_id, target_id, weapon_id) = resolve(session, attacker, target, ItemCategory::Weapon, weapon)?;
    let outcome = session.use_item(attacker_id, target_id, weapon_id)?;
    transcript.push(Event::Attack {
        attacker: attacker.to_string(),
        target: target.to_string(),
        weapon: weapon.to_string(),
    });
    report_death(transcript, target, outcome);
    Ok(())
}

/// `caster` casts one of its spells on `target`.
///
/// # Errors
/// - `CharacterDoesNotExist` if either character is missing
/// - `IllegalItemType` if the caster cannot carry spells
/// - `ElementNotFound` if the caster holds no such spell
/// - `NotAllowedTarget` if the spell may not affect `target`
pub fn cast_handler(
    session: &mut Session,
    transcript: &mut Transcript,
    caster: &str,
    target: &str,
    spell: &str,
) -> Result<(), GameError> {
    let (caster_id, target_id, spell_id) = resolve(session, caster, target, ItemCategory::Spell, spell)?;
    let outcome = session.use_item(caster_id, target_id, spell_id)?;
    transcript.push(Event::Cast {
        caster: caster.to_string(),
        target: target.to_string(),
        spell: spell.to_string(),
    });
    report_death(transcript, target, outcome);
    Ok(())
}

/// `supplier` gives one of its potions to `drinker`.
///
/// # Errors
/// - `CharacterDoesNotExist` if either character is missing
/// - `IllegalItemType` if the supplier cannot carry potions
/// - `ElementNotFound` if the supplier holds no such potion
pub fn drink_handler(
    session: &mut Session,
    transcript: &mut Transcript,
    supplier: &str,
    drinker: &str,
    potion: &str,
) -> Result<(), GameError> {
    let (supplier_id, drinker_id, potion_id) = resolve(session, supplier, drinker, ItemCategory::Potion, potion)?;
    let outcome = session.use_item(supplier_id, drinker_id, potion_id)?;
    transcript.push(Event::Drink {
        supplier: supplier.to_string(),
        drinker: drinker.to_string(),
        potion: potion.to_string(),
    });
    report_death(transcript, drinker, outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Role;
    use crate::item::Item;

    fn arena() -> (Session, Transcript) {
        let mut session = Session::new();
        let rex = session.create_character(Role::Fighter, "Rex", 100).unwrap();
        let mona = session.create_character(Role::Wizard, "Mona", 1).unwrap();
        session.grant_item(Item::weapon(rex, "Sword", 10).unwrap()).unwrap();
        session.grant_item(Item::potion(rex, "Elixir", 20).unwrap()).unwrap();
        session.grant_item(Item::spell(mona, "Doom", vec![mona])).unwrap();
        session.grant_item(Item::spell(mona, "Hex", vec![mona])).unwrap();
        (session, Transcript::new())
    }

    fn hp(session: &Session, name: &str) -> i32 {
        session.character_by_name(name).unwrap().current_hp()
    }

    #[test]
    fn attack_narrates_and_keeps_weapon() {
        let (mut session, mut transcript) = arena();
        attack_handler(&mut session, &mut transcript, "Rex", "Rex", "Sword").unwrap();
        transcript.commit();
        assert_eq!(hp(&session, "Rex"), 90);
        assert_eq!(transcript.render(), "Rex attacks Rex with their Sword!\n");
        assert!(session.character_by_name("Rex").unwrap().held_item(ItemCategory::Weapon, "Sword").is_ok());
    }

    #[test]
    fn lethal_attack_reports_death() {
        let (mut session, mut transcript) = arena();
        attack_handler(&mut session, &mut transcript, "Rex", "Mona", "Sword").unwrap();
        transcript.commit();
        assert_eq!(transcript.render(), "Rex attacks Mona with their Sword!\nMona has died...\n");
        assert!(session.character_by_name("Mona").is_err());
    }

    #[test]
    fn wizard_cannot_attack() {
        let (mut session, mut transcript) = arena();
        let err = attack_handler(&mut session, &mut transcript, "Mona", "Rex", "Sword").unwrap_err();
        assert!(matches!(err, GameError::IllegalItemType { .. }));
        assert_eq!(hp(&session, "Rex"), 100);
    }

    #[test]
    fn missing_weapon_is_not_found() {
        let (mut session, mut transcript) = arena();
        let err = attack_handler(&mut session, &mut transcript, "Rex", "Mona", "Axe").unwrap_err();
        assert_eq!(err, GameError::ElementNotFound("Axe".into()));
    }

    #[test]
    fn cast_on_disallowed_target_fails_cleanly() {
        let (mut session, mut transcript) = arena();
        let err = cast_handler(&mut session, &mut transcript, "Mona", "Rex", "Doom").unwrap_err();
        assert!(matches!(err, GameError::NotAllowedTarget { .. }));
        assert_eq!(hp(&session, "Rex"), 100);
        assert!(session.character_by_name("Mona").unwrap().held_item(ItemCategory::Spell, "Doom").is_ok());
    }

    #[test]
    fn drink_heals_and_consumes() {
        let (mut session, mut transcript) = arena();
        drink_handler(&mut session, &mut transcript, "Rex", "Mona", "Elixir").unwrap();
        transcript.commit();
        assert_eq!(hp(&session, "Mona"), 21);
        assert_eq!(transcript.render(), "Mona drinks Elixir from Rex.\n");
        assert!(session.character_by_name("Rex").unwrap().held_item(ItemCategory::Potion, "Elixir").is_err());

        let err = drink_handler(&mut session, &mut transcript, "Rex", "Mona", "Elixir").unwrap_err();
        assert_eq!(err, GameError::ElementNotFound("Elixir".into()));
    }

    #[test]
    fn suicide_cast_consumes_and_kills() {
        let (mut session, mut transcript) = arena();
        cast_handler(&mut session, &mut transcript, "Mona", "Mona", "Doom").unwrap();
        transcript.commit();
        assert_eq!(transcript.render(), "Mona casts Doom on Mona!\nMona has died...\n");
        assert_eq!(session.show_characters(), "Rex:fighter:100 \n");
        // Rex's sword and elixir are all that remain
        assert_eq!(session.item_count(), 2);
    }
}
