//! Character Module
//!
//! A single [`Character`] type covers every role. What a character can carry is data, not
//! type: each of the three capabilities (weapons, potions, spells) is an optional bounded
//! container, populated according to the character's [`Role`].
//!
//! | Role    | Arsenal | Medical bag | Spell book |
//! |---------|---------|-------------|------------|
//! | Fighter | 3       | 5           | -          |
//! | Archer  | 2       | 3           | 2          |
//! | Wizard  | -       | 10          | 10         |

use std::fmt::Display;

use log::info;
use serde::{Deserialize, Serialize};
use variantly::Variantly;

use crate::container::{BoundedContainer, ItemContainer, ItemTag};
use crate::error::GameError;
use crate::health::{HealthState, LifeState};
use crate::idgen::{Id, new_id};
use crate::item::{Item, ItemCategory, ItemKind};
use crate::world::WorldObject;

pub const FIGHTER_MAX_WEAPONS: usize = 3;
pub const FIGHTER_MAX_POTIONS: usize = 5;
pub const ARCHER_MAX_WEAPONS: usize = 2;
pub const ARCHER_MAX_POTIONS: usize = 3;
pub const ARCHER_MAX_SPELLS: usize = 2;
pub const WIZARD_MAX_POTIONS: usize = 10;
pub const WIZARD_MAX_SPELLS: usize = 10;

/// Character roles available to scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Variantly)]
pub enum Role {
    Fighter,
    Archer,
    Wizard,
}
impl Role {
    /// Parse the lowercase role word used in scripts.
    pub fn from_key(key: &str) -> Option<Role> {
        match key {
            "fighter" => Some(Role::Fighter),
            "archer" => Some(Role::Archer),
            "wizard" => Some(Role::Wizard),
            _ => None,
        }
    }

    /// Container capacities for this role. `None` means the role lacks that capability.
    pub const fn loadout(self) -> Loadout {
        match self {
            Role::Fighter => Loadout {
                weapons: Some(FIGHTER_MAX_WEAPONS),
                potions: Some(FIGHTER_MAX_POTIONS),
                spells: None,
            },
            Role::Archer => Loadout {
                weapons: Some(ARCHER_MAX_WEAPONS),
                potions: Some(ARCHER_MAX_POTIONS),
                spells: Some(ARCHER_MAX_SPELLS),
            },
            Role::Wizard => Loadout {
                weapons: None,
                potions: Some(WIZARD_MAX_POTIONS),
                spells: Some(WIZARD_MAX_SPELLS),
            },
        }
    }
}
impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Fighter => write!(f, "fighter"),
            Role::Archer => write!(f, "archer"),
            Role::Wizard => write!(f, "wizard"),
        }
    }
}

/// Per-capability capacities of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loadout {
    pub weapons: Option<usize>,
    pub potions: Option<usize>,
    pub spells: Option<usize>,
}

/// A named combatant with health and whatever item containers its role allows.
#[derive(Debug, Clone)]
pub struct Character {
    id: Id,
    name: String,
    role: Role,
    health: HealthState,
    arsenal: Option<BoundedContainer<ItemContainer>>,
    medical_bag: Option<BoundedContainer<ItemContainer>>,
    spell_book: Option<BoundedContainer<ItemContainer>>,
}

impl WorldObject for Character {
    fn id(&self) -> Id {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Character {
    /// Create a character with empty containers sized for its role.
    ///
    /// # Errors
    /// - `IllegalHealthValue` if `initial_hp` is not positive
    pub fn new(role: Role, name: &str, initial_hp: i32) -> Result<Character, GameError> {
        let health = HealthState::new(initial_hp)?;
        let loadout = role.loadout();
        Ok(Character {
            id: new_id(),
            name: name.to_string(),
            role,
            health,
            arsenal: loadout.weapons.map(BoundedContainer::<ItemContainer>::for_items),
            medical_bag: loadout.potions.map(BoundedContainer::<ItemContainer>::for_items),
            spell_book: loadout.spells.map(BoundedContainer::<ItemContainer>::for_items),
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn current_hp(&self) -> i32 {
        self.health.current_hp()
    }

    pub fn life_state(&self) -> LifeState {
        self.health.life_state()
    }

    /// The container holding items of `category`, if this character has that capability.
    pub fn container(&self, category: ItemCategory) -> Option<&BoundedContainer<ItemContainer>> {
        match category {
            ItemCategory::Weapon => self.arsenal.as_ref(),
            ItemCategory::Potion => self.medical_bag.as_ref(),
            ItemCategory::Spell => self.spell_book.as_ref(),
        }
    }

    /// Like [`container`](Self::container), but a missing capability is an error.
    ///
    /// # Errors
    /// - `IllegalItemType` if the role cannot hold items of `category`
    pub fn require_container(
        &self,
        category: ItemCategory,
    ) -> Result<&BoundedContainer<ItemContainer>, GameError> {
        self.container(category).ok_or_else(|| self.illegal_item_type(category))
    }

    /// Id of the item of `category` this character holds under `name`.
    ///
    /// # Errors
    /// - `IllegalItemType` if the role cannot hold items of `category`
    /// - `ElementNotFound` if no such item is held
    pub fn held_item(&self, category: ItemCategory, name: &str) -> Result<Id, GameError> {
        self.require_container(category)?.get(name)
    }

    /// Check every precondition of [`obtain_item`](Self::obtain_item) without changing
    /// anything.
    ///
    /// # Errors
    /// Same as `obtain_item`.
    pub fn can_obtain(&self, item: &Item) -> Result<(), GameError> {
        self.require_container(item.category())?.can_add(&item.tag())
    }

    /// File `item` into the container matching its kind.
    ///
    /// # Errors
    /// - `IllegalItemType` if the role cannot hold this kind of item
    /// - `FullContainer` if the matching container is at capacity
    /// - `DuplicateItemName` if an item of that kind with the same name is already held
    pub fn obtain_item(&mut self, item: &Item) -> Result<(), GameError> {
        let category = item.category();
        let slot = match item.kind() {
            ItemKind::Weapon { .. } => self.arsenal.as_mut(),
            ItemKind::Potion { .. } => self.medical_bag.as_mut(),
            ItemKind::Spell { .. } => self.spell_book.as_mut(),
        };
        match slot {
            Some(container) => container.add_item(item.tag()),
            None => Err(GameError::IllegalItemType {
                holder: self.name.clone(),
                kind: category.to_string(),
            }),
        }
    }

    /// Remove an item from whichever container holds it. Containers are searched in a
    /// fixed order: arsenal, medical bag, spell book. Only an entry with the same id
    /// counts as a match, so same-named items of another kind are left alone.
    ///
    /// # Errors
    /// - `ElementNotFound` if no container holds the item
    pub fn lose_item(&mut self, item: &ItemTag) -> Result<(), GameError> {
        for container in [&mut self.arsenal, &mut self.medical_bag, &mut self.spell_book]
            .into_iter()
            .flatten()
        {
            if container.get(&item.name).is_ok_and(|id| id == item.id) {
                container.remove_item(&item.name)?;
                info!("{} lost item '{}' ({})", self.name, item.name, item.id);
                return Ok(());
            }
        }
        Err(GameError::ElementNotFound(item.name.clone()))
    }

    /// Ids of every item currently held, in any container.
    pub fn item_ids(&self) -> Vec<Id> {
        [&self.arsenal, &self.medical_bag, &self.spell_book]
            .into_iter()
            .flatten()
            .flat_map(|container| container.elements())
            .map(|tag| tag.id)
            .collect()
    }

    /// Apply damage and report whether the character survived it.
    pub fn take_damage(&mut self, amount: i32) -> LifeState {
        self.health.damage(amount);
        self.health.life_state()
    }

    pub fn heal(&mut self, amount: i32) {
        self.health.heal(amount);
    }

    /// `name:role:hp` token used by `Show characters`.
    pub fn listing_token(&self) -> String {
        format!("{}:{}:{}", self.name, self.role, self.health.current_hp())
    }

    fn illegal_item_type(&self, category: ItemCategory) -> GameError {
        GameError::IllegalItemType {
            holder: self.name.clone(),
            kind: category.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(owner: &Character, name: &str) -> Item {
        Item::weapon(owner.id(), name, 5).unwrap()
    }

    #[test]
    fn roles_get_their_capabilities() {
        let fighter = Character::new(Role::Fighter, "Rex", 10).unwrap();
        assert_eq!(fighter.container(ItemCategory::Weapon).unwrap().max_capacity(), 3);
        assert_eq!(fighter.container(ItemCategory::Potion).unwrap().max_capacity(), 5);
        assert!(fighter.container(ItemCategory::Spell).is_none());

        let archer = Character::new(Role::Archer, "Robin", 10).unwrap();
        assert_eq!(archer.container(ItemCategory::Weapon).unwrap().max_capacity(), 2);
        assert_eq!(archer.container(ItemCategory::Potion).unwrap().max_capacity(), 3);
        assert_eq!(archer.container(ItemCategory::Spell).unwrap().max_capacity(), 2);

        let wizard = Character::new(Role::Wizard, "Mona", 10).unwrap();
        assert!(wizard.container(ItemCategory::Weapon).is_none());
        assert_eq!(wizard.container(ItemCategory::Potion).unwrap().max_capacity(), 10);
        assert_eq!(wizard.container(ItemCategory::Spell).unwrap().max_capacity(), 10);
    }

    #[test]
    fn role_keys_round_trip() {
        for role in [Role::Fighter, Role::Archer, Role::Wizard] {
            assert_eq!(Role::from_key(&role.to_string()), Some(role));
        }
        assert_eq!(Role::from_key("bard"), None);
    }

    #[test]
    fn obtain_routes_by_kind() {
        let mut archer = Character::new(Role::Archer, "Robin", 10).unwrap();
        let bow = weapon(&archer, "Bow");
        let tonic = Item::potion(archer.id(), "Tonic", 3).unwrap();
        let doom = Item::spell(archer.id(), "Doom", vec![]);

        archer.obtain_item(&bow).unwrap();
        archer.obtain_item(&tonic).unwrap();
        archer.obtain_item(&doom).unwrap();

        assert_eq!(archer.held_item(ItemCategory::Weapon, "Bow").unwrap(), bow.id());
        assert_eq!(archer.held_item(ItemCategory::Potion, "Tonic").unwrap(), tonic.id());
        assert_eq!(archer.held_item(ItemCategory::Spell, "Doom").unwrap(), doom.id());
        assert_eq!(archer.item_ids().len(), 3);
    }

    #[test]
    fn wizard_cannot_obtain_weapons() {
        let mut wizard = Character::new(Role::Wizard, "Mona", 10).unwrap();
        let staff = weapon(&wizard, "Staff");
        assert!(matches!(wizard.can_obtain(&staff), Err(GameError::IllegalItemType { .. })));
        assert!(matches!(wizard.obtain_item(&staff), Err(GameError::IllegalItemType { .. })));
        assert!(wizard.item_ids().is_empty());
    }

    #[test]
    fn fighter_arsenal_fills_up() {
        let mut fighter = Character::new(Role::Fighter, "Rex", 10).unwrap();
        for name in ["Axe", "Club", "Dagger"] {
            let item = weapon(&fighter, name);
            fighter.obtain_item(&item).unwrap();
        }
        let extra = weapon(&fighter, "Flail");
        assert_eq!(fighter.can_obtain(&extra).unwrap_err(), GameError::FullContainer(3));
        assert_eq!(fighter.obtain_item(&extra).unwrap_err(), GameError::FullContainer(3));
        assert_eq!(fighter.container(ItemCategory::Weapon).unwrap().size(), 3);
    }

    #[test]
    fn lose_item_only_removes_the_matching_entry() {
        let mut archer = Character::new(Role::Archer, "Robin", 10).unwrap();
        let blade = weapon(&archer, "Ash");
        let tonic = Item::potion(archer.id(), "Ash", 2).unwrap();
        archer.obtain_item(&blade).unwrap();
        archer.obtain_item(&tonic).unwrap();

        archer.lose_item(&tonic.tag()).unwrap();
        assert!(archer.held_item(ItemCategory::Weapon, "Ash").is_ok());
        assert!(archer.held_item(ItemCategory::Potion, "Ash").is_err());

        assert!(matches!(archer.lose_item(&tonic.tag()), Err(GameError::ElementNotFound(_))));
    }

    #[test]
    fn damage_and_heal() {
        let mut rex = Character::new(Role::Fighter, "Rex", 10).unwrap();
        assert!(rex.take_damage(4).is_alive());
        rex.heal(1);
        assert_eq!(rex.current_hp(), 7);
        assert!(rex.take_damage(7).is_dead());
        assert_eq!(rex.listing_token(), "Rex:fighter:0");
    }
}
