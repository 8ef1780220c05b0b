//! Item types and related helpers.
//!
//! Every item has exactly one owner, fixed when the item is created. What the item does
//! when used is determined by its [`ItemKind`]:
//!
//! - a weapon deals its damage and can be used again,
//! - a potion heals by its heal value and is used up,
//! - a spell kills one of its allowed targets outright and is used up.
//!
//! The use protocol itself (owner check, effect, consumption) lives on
//! [`Session::use_item`](crate::session::Session::use_item), since it touches both the
//! item arena and the roster.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use variantly::Variantly;

use crate::container::ItemTag;
use crate::error::GameError;
use crate::idgen::{Id, new_id};
use crate::world::WorldObject;

/// The three families of item. Used to route items to the right character container and
/// to name a family in commands (`Create item weapon`, `Show spells`...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Variantly)]
pub enum ItemCategory {
    Weapon,
    Potion,
    Spell,
}
impl Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemCategory::Weapon => write!(f, "weapon"),
            ItemCategory::Potion => write!(f, "potion"),
            ItemCategory::Spell => write!(f, "spell"),
        }
    }
}

/// Variant-specific payload of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Variantly)]
pub enum ItemKind {
    Weapon { damage: i32 },
    Potion { heal_value: i32 },
    Spell { allowed_targets: Vec<Id> },
}
impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Weapon { .. } => ItemCategory::Weapon,
            ItemKind::Potion { .. } => ItemCategory::Potion,
            ItemKind::Spell { .. } => ItemCategory::Spell,
        }
    }
}

/// A weapon, potion or spell belonging to one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: Id,
    name: String,
    owner: Id,
    kind: ItemKind,
}

impl WorldObject for Item {
    fn id(&self) -> Id {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Item {
    /// Create a reusable weapon.
    ///
    /// # Errors
    /// - `IllegalDamageValue` if `damage` is not positive
    pub fn weapon(owner: Id, name: &str, damage: i32) -> Result<Item, GameError> {
        if damage <= 0 {
            return Err(GameError::IllegalDamageValue(damage));
        }
        Ok(Item::with_kind(owner, name, ItemKind::Weapon { damage }))
    }

    /// Create a single-use potion.
    ///
    /// # Errors
    /// - `IllegalHealthValue` if `heal_value` is not positive
    pub fn potion(owner: Id, name: &str, heal_value: i32) -> Result<Item, GameError> {
        if heal_value <= 0 {
            return Err(GameError::IllegalHealthValue(heal_value));
        }
        Ok(Item::with_kind(owner, name, ItemKind::Potion { heal_value }))
    }

    /// Create a single-use spell. An empty target list is allowed; such a spell can never
    /// be cast successfully.
    pub fn spell(owner: Id, name: &str, allowed_targets: Vec<Id>) -> Item {
        Item::with_kind(owner, name, ItemKind::Spell { allowed_targets })
    }

    fn with_kind(owner: Id, name: &str, kind: ItemKind) -> Item {
        Item {
            id: new_id(),
            name: name.to_string(),
            owner,
            kind,
        }
    }

    pub fn owner(&self) -> Id {
        self.owner
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    /// Potions and spells are consumed by a successful use; weapons are not.
    pub fn is_usable_once(&self) -> bool {
        !self.kind.is_weapon()
    }

    /// Returns true if this is a spell and `target` is on its list.
    pub fn allows_target(&self, target: Id) -> bool {
        match &self.kind {
            ItemKind::Spell { allowed_targets } => allowed_targets.contains(&target),
            _ => false,
        }
    }

    /// The value shown next to the name in listings: damage, heal value, or number of
    /// allowed targets.
    pub fn attribute(&self) -> String {
        match &self.kind {
            ItemKind::Weapon { damage } => damage.to_string(),
            ItemKind::Potion { heal_value } => heal_value.to_string(),
            ItemKind::Spell { allowed_targets } => allowed_targets.len().to_string(),
        }
    }

    /// `name:attribute` token used by `Show` listings.
    pub fn listing_token(&self) -> String {
        format!("{}:{}", self.name, self.attribute())
    }

    /// Handle under which this item is filed in a container.
    pub fn tag(&self) -> ItemTag {
        ItemTag {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
