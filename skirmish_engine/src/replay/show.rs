//! `replay::show` module
//!
//! Handlers for `Show` commands, which list the roster or one character's items.

use crate::error::GameError;
use crate::item::ItemCategory;
use crate::session::Session;
use crate::transcript::{Event, Transcript};

/// Lists every living character as `name:role:hp`, sorted by name.
pub fn show_characters_handler(session: &Session, transcript: &mut Transcript) {
    transcript.push(Event::Listing(session.show_characters()));
}

/// Lists one character's weapons, potions or spells, sorted by name.
///
/// # Errors
/// - `CharacterDoesNotExist` if the character is not alive
/// - `IllegalItemType` if the character cannot carry that kind of item
pub fn show_items_handler(
    session: &Session,
    transcript: &mut Transcript,
    owner: &str,
    category: ItemCategory,
) -> Result<(), GameError> {
    let listing = session.show_items(owner, category)?;
    transcript.push(Event::Listing(listing));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Role;
    use crate::item::Item;

    #[test]
    fn listings_are_sorted_by_name() {
        let mut session = Session::new();
        let mona = session.create_character(Role::Wizard, "Mona", 8).unwrap();
        session.create_character(Role::Archer, "Ann", 12).unwrap();
        session.grant_item(Item::potion(mona, "Tonic", 4).unwrap()).unwrap();
        session.grant_item(Item::potion(mona, "Balm", 9).unwrap()).unwrap();

        let mut transcript = Transcript::new();
        show_characters_handler(&session, &mut transcript);
        show_items_handler(&session, &mut transcript, "Mona", ItemCategory::Potion).unwrap();
        show_items_handler(&session, &mut transcript, "Mona", ItemCategory::Spell).unwrap();
        transcript.commit();

        assert_eq!(
            transcript.render(),
            "Ann:archer:12 Mona:wizard:8 \nBalm:9 Tonic:4 \n\n"
        );
    }

    #[test]
    fn missing_capability_is_an_error() {
        let mut session = Session::new();
        session.create_character(Role::Fighter, "Rex", 8).unwrap();
        let mut transcript = Transcript::new();
        assert!(matches!(
            show_items_handler(&session, &mut transcript, "Rex", ItemCategory::Spell),
            Err(GameError::IllegalItemType { .. })
        ));
        assert!(matches!(
            show_items_handler(&session, &mut transcript, "Ghost", ItemCategory::Weapon),
            Err(GameError::CharacterDoesNotExist(_))
        ));
    }
}
