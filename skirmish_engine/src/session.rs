//! Data structures representing a running session.
//!
//! [`Session`] owns everything that exists while a script is replayed:
//!
//! - the roster, a [`Container`] of living characters, which is the only place a
//!   character lives and the only authority that may destroy one;
//! - the item arena, mapping item ids to items.
//!
//! Characters refer to their items by id, and items refer to their owner by id, so there
//! are no reference cycles: the two arenas own all the memory.

use std::collections::HashMap;

use log::{info, warn};

use crate::character::{Character, Role};
use crate::container::{Container, ItemTag};
use crate::error::GameError;
use crate::health::LifeState;
use crate::idgen::Id;
use crate::item::{Item, ItemCategory, ItemKind};
use crate::world::WorldObject;

/// What a successful item use did, for the caller to narrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseOutcome {
    /// The item was one-shot and has been removed from its owner and the arena.
    pub consumed: bool,
    /// Life state of the target after the effect. A dead target is already off the roster.
    pub target_state: LifeState,
}

/// Complete state of a running session.
#[derive(Debug, Default)]
pub struct Session {
    roster: Container<Character>,
    items: HashMap<Id, Item>,
}

impl Session {
    /// Create a session with an empty roster and no items.
    pub fn new() -> Session {
        info!("new, empty 'Session' created");
        Session::default()
    }

    pub fn roster(&self) -> &Container<Character> {
        &self.roster
    }

    pub fn character(&self, id: Id) -> Option<&Character> {
        self.roster.get(id)
    }

    pub fn item(&self, id: Id) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Look up a living character by name.
    ///
    /// # Errors
    /// - `CharacterDoesNotExist` if no living character has that name
    pub fn character_by_name(&self, name: &str) -> Result<&Character, GameError> {
        self.roster
            .find_by_name(name)
            .ok_or_else(|| GameError::CharacterDoesNotExist(name.to_string()))
    }

    /// Add a new character to the roster and return its id.
    ///
    /// # Errors
    /// - `DuplicateCharacterName` if a living character already has that name
    /// - `IllegalHealthValue` if `initial_hp` is not positive
    pub fn create_character(&mut self, role: Role, name: &str, initial_hp: i32) -> Result<Id, GameError> {
        if self.roster.find_by_name(name).is_some() {
            return Err(GameError::DuplicateCharacterName(name.to_string()));
        }
        let character = Character::new(role, name, initial_hp)?;
        let id = character.id();
        self.roster.add_item(character);
        info!("{role} '{name}' ({id}) joined the roster with {initial_hp} hp");
        Ok(id)
    }

    /// Give a freshly constructed item to its owner and register it in the arena.
    ///
    /// Nothing is changed unless the owner can accept the item.
    ///
    /// # Errors
    /// - `CharacterDoesNotExist` if the owner is not on the roster
    /// - `IllegalItemType`, `FullContainer`, `DuplicateItemName` from the owner
    pub fn grant_item(&mut self, item: Item) -> Result<Id, GameError> {
        let owner = self
            .roster
            .get_mut(item.owner())
            .ok_or_else(|| GameError::CharacterDoesNotExist(item.owner().to_string()))?;
        owner.can_obtain(&item)?;
        owner.obtain_item(&item)?;
        info!(
            "{} obtained {} '{}' ({})",
            owner.name(),
            item.category(),
            item.name(),
            item.id()
        );
        let id = item.id();
        self.items.insert(id, item);
        Ok(id)
    }

    /// Resolve spell target names to ids.
    ///
    /// # Errors
    /// - `CharacterDoesNotExist` for the first name not on the roster
    pub fn resolve_targets(&self, names: &[String]) -> Result<Vec<Id>, GameError> {
        names
            .iter()
            .map(|name| self.character_by_name(name).map(WorldObject::id))
            .collect()
    }

    /// Use an item: `user` applies `item` to `target`.
    ///
    /// 1. `user` must be the item's owner.
    /// 2. The effect is applied: weapons deal their damage, potions heal, spells deal damage
    ///    equal to the target's current health (only to an allowed target).
    /// 3. One-shot items are removed from their owner and released.
    ///
    /// A target whose health reaches zero or below is removed from the roster, together
    /// with every item it owned. All checks happen before anything changes, so a failed
    /// use leaves the session untouched.
    ///
    /// # Errors
    /// - `ElementNotFound` if the item is not in the arena
    /// - `CharacterDoesNotExist` if user or target is not on the roster
    /// - `CharacterDoesNotOwnItem` if `user` is not the owner
    /// - `NotAllowedTarget` if a spell's target is not on its list
    pub fn use_item(&mut self, user: Id, target: Id, item_id: Id) -> Result<UseOutcome, GameError> {
        let item = self
            .items
            .get(&item_id)
            .ok_or_else(|| GameError::ElementNotFound(item_id.to_string()))?;
        let user_ref = self
            .roster
            .get(user)
            .ok_or_else(|| GameError::CharacterDoesNotExist(user.to_string()))?;
        let target_ref = self
            .roster
            .get(target)
            .ok_or_else(|| GameError::CharacterDoesNotExist(target.to_string()))?;

        if item.owner() != user {
            return Err(GameError::CharacterDoesNotOwnItem {
                user: user_ref.name().to_string(),
                item: item.name().to_string(),
            });
        }

        let effect = match item.kind() {
            ItemKind::Weapon { damage } => Effect::Damage(*damage),
            ItemKind::Potion { heal_value } => Effect::Heal(*heal_value),
            ItemKind::Spell { .. } => {
                if !item.allows_target(target) {
                    return Err(GameError::NotAllowedTarget {
                        spell: item.name().to_string(),
                        target: target_ref.name().to_string(),
                    });
                }
                Effect::Damage(target_ref.current_hp())
            },
        };
        let consumed = item.is_usable_once();
        let tag = item.tag();

        let target_state = match effect {
            Effect::Damage(amount) => self.give_damage_to(target, amount),
            Effect::Heal(amount) => self.give_heal_to(target, amount),
        };

        if consumed {
            self.consume(user, &tag);
        }
        if target_state.is_dead() {
            self.kill(target);
        }
        Ok(UseOutcome { consumed, target_state })
    }

    /// Sorted `name:role:hp` listing of the roster.
    pub fn show_characters(&self) -> String {
        self.roster.show(Character::listing_token)
    }

    /// Sorted `name:attribute` listing of one of a character's containers.
    ///
    /// # Errors
    /// - `CharacterDoesNotExist` if no living character has that name
    /// - `IllegalItemType` if the character cannot hold items of `category`
    pub fn show_items(&self, owner: &str, category: ItemCategory) -> Result<String, GameError> {
        let container = self.character_by_name(owner)?.require_container(category)?;
        Ok(container.show(|tag| {
            self.items
                .get(&tag.id)
                .map_or_else(|| tag.name.clone(), Item::listing_token)
        }))
    }

    fn give_damage_to(&mut self, target: Id, amount: i32) -> LifeState {
        match self.roster.get_mut(target) {
            Some(character) => {
                let state = character.take_damage(amount);
                info!("{} took {amount} damage ({} hp left)", character.name(), character.current_hp());
                state
            },
            None => {
                warn!("damage dealt to unknown character id {target}");
                LifeState::Dead
            },
        }
    }

    fn give_heal_to(&mut self, target: Id, amount: i32) -> LifeState {
        match self.roster.get_mut(target) {
            Some(character) => {
                character.heal(amount);
                info!("{} healed by {amount} ({} hp)", character.name(), character.current_hp());
                character.life_state()
            },
            None => {
                warn!("heal given to unknown character id {target}");
                LifeState::Dead
            },
        }
    }

    /// The owner's lose-item hook followed by release from the arena.
    fn consume(&mut self, owner: Id, tag: &ItemTag) {
        if let Some(character) = self.roster.get_mut(owner)
            && let Err(e) = character.lose_item(tag)
        {
            warn!("consumed item '{}' was not held by its owner: {e}", tag.name);
        }
        self.items.remove(&tag.id);
        info!("item '{}' ({}) consumed", tag.name, tag.id);
    }

    /// Remove a character from the roster and release everything it owned.
    fn kill(&mut self, id: Id) {
        if let Some(character) = self.roster.remove_by_id(id) {
            for item_id in character.item_ids() {
                self.items.remove(&item_id);
            }
            info!("{} ({id}) died and left the roster", character.name());
        }
    }
}

enum Effect {
    Damage(i32),
    Heal(i32),
}
