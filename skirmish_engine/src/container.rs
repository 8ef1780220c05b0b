//! Container Module
//!
//! Collections used to hold characters and items.
//!
//! - [`Container`] is a plain ordered collection of world objects. Membership is by
//!   identity (same id), never by name, and duplicates are not suppressed. The session
//!   roster is one of these.
//! - [`ItemContainer`] is the item-specific form: a map from item name to item id. The items
//!   themselves live in the session's item arena, so the container only stores handles.
//! - [`BoundedContainer`] wraps either form and enforces a maximum element count at
//!   insertion time. Characters keep their arsenal, medical bag and spell book in these.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::GameError;
use crate::idgen::Id;
use crate::world::{WorldObject, by_name};

/// Behavior common to both container forms, so a [`BoundedContainer`] can wrap either.
pub trait Storage {
    type Element: WorldObject + Clone;

    /// Number of elements currently held.
    fn size(&self) -> usize;

    /// Check whether `element` could be inserted, without inserting it.
    ///
    /// # Errors
    /// - if the storage refuses the element (e.g. a duplicate item name)
    fn admits(&self, element: &Self::Element) -> Result<(), GameError>;

    /// Insert an element.
    ///
    /// # Errors
    /// - whatever `admits` would report for the element
    fn insert(&mut self, element: Self::Element) -> Result<(), GameError>;

    /// Snapshot of all elements.
    fn elements(&self) -> Vec<Self::Element>;
}

/// Sort `elements` by name and render each one followed by a space, ending with a newline.
fn sorted_listing<T: WorldObject>(mut elements: Vec<T>, render: impl Fn(&T) -> String) -> String {
    elements.sort_by(by_name);
    let mut listing: String = elements.iter().map(|e| format!("{} ", render(e))).collect();
    listing.push('\n');
    listing
}

/// Ordered, vector-backed collection with linear find / remove.
#[derive(Debug, Clone)]
pub struct Container<T> {
    elements: Vec<T>,
}
impl<T> Default for Container<T> {
    fn default() -> Self {
        Self { elements: Vec::new() }
    }
}
impl<T: WorldObject> Container<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true if this exact object (by id) is held.
    pub fn find(&self, element: &T) -> bool {
        self.elements.iter().any(|e| e.id() == element.id())
    }

    /// Appends an element. No duplicate check is made.
    pub fn add_item(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Removes and returns the first element with the same id as `element`.
    ///
    /// # Errors
    /// - `ElementNotFound` if no element has that id
    pub fn remove_item(&mut self, element: &T) -> Result<T, GameError> {
        self.remove_by_id(element.id())
            .ok_or_else(|| GameError::ElementNotFound(element.name().to_string()))
    }

    /// Removes and returns the element with the given id, if present.
    pub fn remove_by_id(&mut self, id: Id) -> Option<T> {
        let idx = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// First element with the given name, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<&T> {
        self.elements.iter().find(|e| e.name() == name)
    }
}
impl<T: WorldObject + Clone> Container<T> {
    /// Snapshot copy of the elements, in insertion order.
    pub fn elements(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Sorted listing of the contents, same format as [`BoundedContainer::show`].
    pub fn show(&self, render: impl Fn(&T) -> String) -> String {
        sorted_listing(self.elements(), render)
    }
}
impl<T: WorldObject + Clone> Storage for Container<T> {
    type Element = T;

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn admits(&self, _element: &T) -> Result<(), GameError> {
        Ok(())
    }

    fn insert(&mut self, element: T) -> Result<(), GameError> {
        self.add_item(element);
        Ok(())
    }

    fn elements(&self) -> Vec<T> {
        self.elements.clone()
    }
}

/// Lightweight handle to an item: its id plus the name it is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTag {
    pub id: Id,
    pub name: String,
}
impl WorldObject for ItemTag {
    fn id(&self) -> Id {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// Name-keyed collection of item handles with O(1) lookup and removal by name.
///
/// Inserting a name that is already present is refused with `DuplicateItemName`; an
/// existing entry is never overwritten.
#[derive(Debug, Clone, Default)]
pub struct ItemContainer {
    by_name: HashMap<String, Id>,
}
impl ItemContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.by_name.len()
    }

    /// File an item under its name.
    ///
    /// # Errors
    /// - `DuplicateItemName` if the name is already taken in this container
    pub fn add_item(&mut self, tag: ItemTag) -> Result<(), GameError> {
        match self.by_name.entry(tag.name) {
            Entry::Occupied(taken) => Err(GameError::DuplicateItemName(taken.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(tag.id);
                Ok(())
            },
        }
    }

    pub fn find(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Id of the item filed under `name`.
    ///
    /// # Errors
    /// - `ElementNotFound` if nothing is filed under that name
    pub fn get(&self, name: &str) -> Result<Id, GameError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GameError::ElementNotFound(name.to_string()))
    }

    /// Remove the item filed under `name`, returning its id.
    ///
    /// # Errors
    /// - `ElementNotFound` if nothing is filed under that name
    pub fn remove_item(&mut self, name: &str) -> Result<Id, GameError> {
        self.by_name
            .remove(name)
            .ok_or_else(|| GameError::ElementNotFound(name.to_string()))
    }

    /// Snapshot of all handles. Order is unspecified.
    pub fn elements(&self) -> Vec<ItemTag> {
        self.by_name
            .iter()
            .map(|(name, id)| ItemTag {
                id: *id,
                name: name.clone(),
            })
            .collect()
    }
}
impl Storage for ItemContainer {
    type Element = ItemTag;

    fn size(&self) -> usize {
        self.by_name.len()
    }

    fn admits(&self, element: &ItemTag) -> Result<(), GameError> {
        if self.find(&element.name) {
            Err(GameError::DuplicateItemName(element.name.clone()))
        } else {
            Ok(())
        }
    }

    fn insert(&mut self, element: ItemTag) -> Result<(), GameError> {
        self.add_item(element)
    }

    fn elements(&self) -> Vec<ItemTag> {
        ItemContainer::elements(self)
    }
}

/// A container with a fixed maximum element count.
///
/// Capacity is checked only when inserting; nothing already held is ever evicted.
#[derive(Debug, Clone)]
pub struct BoundedContainer<S> {
    storage: S,
    max_capacity: usize,
}
impl<S: Storage> BoundedContainer<S> {
    pub fn new(storage: S, max_capacity: usize) -> Self {
        Self { storage, max_capacity }
    }

    pub fn size(&self) -> usize {
        self.storage.size()
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn is_full(&self) -> bool {
        self.storage.size() >= self.max_capacity
    }

    /// # Errors
    /// - `FullContainer` if the container is already at capacity
    pub fn check_capacity(&self) -> Result<(), GameError> {
        if self.is_full() {
            Err(GameError::FullContainer(self.max_capacity))
        } else {
            Ok(())
        }
    }

    /// Runs every check `add_item` would, without inserting.
    ///
    /// # Errors
    /// - `FullContainer`, or whatever the wrapped storage refuses
    pub fn can_add(&self, element: &S::Element) -> Result<(), GameError> {
        self.check_capacity()?;
        self.storage.admits(element)
    }

    /// Insert an element if there is room for it.
    ///
    /// # Errors
    /// - `FullContainer` if already at capacity (size is left unchanged)
    /// - any error from the wrapped storage
    pub fn add_item(&mut self, element: S::Element) -> Result<(), GameError> {
        self.check_capacity()?;
        self.storage.insert(element)
    }

    pub fn elements(&self) -> Vec<S::Element> {
        self.storage.elements()
    }

    /// Sorted listing of the contents: every element rendered by `render` and followed by a
    /// single space, with a trailing newline.
    pub fn show(&self, render: impl Fn(&S::Element) -> String) -> String {
        sorted_listing(self.storage.elements(), render)
    }
}
impl BoundedContainer<ItemContainer> {
    /// Bounded, name-keyed item container with the given capacity.
    pub fn for_items(max_capacity: usize) -> Self {
        Self::new(ItemContainer::new(), max_capacity)
    }

    pub fn find(&self, name: &str) -> bool {
        self.storage.find(name)
    }

    /// # Errors
    /// - `ElementNotFound` if nothing is filed under that name
    pub fn get(&self, name: &str) -> Result<Id, GameError> {
        self.storage.get(name)
    }

    /// # Errors
    /// - `ElementNotFound` if nothing is filed under that name
    pub fn remove_item(&mut self, name: &str) -> Result<Id, GameError> {
        self.storage.remove_item(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::new_id;

    #[derive(Debug, Clone)]
    struct Token {
        id: Id,
        name: String,
    }
    impl Token {
        fn named(name: &str) -> Self {
            Self {
                id: new_id(),
                name: name.into(),
            }
        }
    }
    impl WorldObject for Token {
        fn id(&self) -> Id {
            self.id
        }
        fn name(&self) -> &str {
            &self.name
        }
    }

    fn tag(name: &str) -> ItemTag {
        ItemTag {
            id: new_id(),
            name: name.into(),
        }
    }

    #[test]
    fn container_find_is_identity_based() {
        let mut container = Container::new();
        let original = Token::named("Rex");
        let lookalike = Token::named("Rex");
        container.add_item(original.clone());

        assert!(container.find(&original));
        assert!(!container.find(&lookalike));
    }

    #[test]
    fn container_keeps_duplicates_and_insertion_order() {
        let mut container = Container::new();
        let a = Token::named("b");
        let b = Token::named("a");
        container.add_item(a.clone());
        container.add_item(b.clone());
        container.add_item(a.clone());

        let names: Vec<_> = container.elements().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);

        container.remove_item(&a).unwrap();
        assert_eq!(container.size(), 2);
        assert!(container.find(&a));
    }

    #[test]
    fn container_show_sorts_by_name() {
        let mut roster = Container::new();
        roster.add_item(Token::named("Mona"));
        roster.add_item(Token::named("Alice"));
        assert_eq!(roster.show(|t| t.name.clone()), "Alice Mona \n");
    }

    #[test]
    fn container_remove_missing_fails() {
        let mut container: Container<Token> = Container::new();
        let ghost = Token::named("Ghost");
        assert_eq!(
            container.remove_item(&ghost).unwrap_err(),
            GameError::ElementNotFound("Ghost".into())
        );
    }

    #[test]
    fn item_container_lookup_and_removal_by_name() {
        let mut bag = ItemContainer::new();
        let sword = tag("Sword");
        bag.add_item(sword.clone()).unwrap();

        assert!(bag.find("Sword"));
        assert_eq!(bag.get("Sword").unwrap(), sword.id);
        assert_eq!(bag.remove_item("Sword").unwrap(), sword.id);
        assert!(!bag.find("Sword"));
        assert!(matches!(bag.get("Sword"), Err(GameError::ElementNotFound(_))));
        assert!(matches!(bag.remove_item("Sword"), Err(GameError::ElementNotFound(_))));
    }

    #[test]
    fn item_container_rejects_duplicate_names() {
        let mut bag = ItemContainer::new();
        let first = tag("Sword");
        bag.add_item(first.clone()).unwrap();

        let err = bag.add_item(tag("Sword")).unwrap_err();
        assert_eq!(err, GameError::DuplicateItemName("Sword".into()));
        assert_eq!(bag.size(), 1);
        assert_eq!(bag.get("Sword").unwrap(), first.id);
    }

    #[test]
    fn bounded_container_refuses_beyond_capacity() {
        let mut arsenal = BoundedContainer::for_items(2);
        arsenal.add_item(tag("Axe")).unwrap();
        arsenal.add_item(tag("Bow")).unwrap();

        assert!(arsenal.is_full());
        assert_eq!(arsenal.add_item(tag("Club")).unwrap_err(), GameError::FullContainer(2));
        assert_eq!(arsenal.size(), 2);
        assert!(!arsenal.find("Club"));
    }

    #[test]
    fn bounded_container_can_add_checks_without_inserting() {
        let mut bag = BoundedContainer::for_items(1);
        assert!(bag.can_add(&tag("Elixir")).is_ok());
        assert_eq!(bag.size(), 0);

        bag.add_item(tag("Elixir")).unwrap();
        assert_eq!(bag.can_add(&tag("Tonic")).unwrap_err(), GameError::FullContainer(1));
    }

    #[test]
    fn bounded_container_zero_capacity_is_always_full() {
        let mut bag = BoundedContainer::for_items(0);
        assert!(matches!(bag.add_item(tag("Anything")), Err(GameError::FullContainer(0))));
    }

    #[test]
    fn bounded_generic_container_wraps_plain_container() {
        let mut party = BoundedContainer::new(Container::new(), 1);
        party.add_item(Token::named("Rex")).unwrap();
        assert!(party.add_item(Token::named("Mona")).is_err());
        assert_eq!(party.show(|t| t.name.clone()), "Rex \n");
    }

    #[test]
    fn show_is_sorted_regardless_of_insertion_order() {
        let mut book = BoundedContainer::for_items(5);
        for name in ["Zap", "Doom", "Mist", "Blink"] {
            book.add_item(tag(name)).unwrap();
        }
        assert_eq!(book.show(|t| format!("{}:x", t.name)), "Blink:x Doom:x Mist:x Zap:x \n");
    }

    #[test]
    fn show_on_empty_container_is_just_a_newline() {
        let book = BoundedContainer::for_items(5);
        assert_eq!(book.show(|t| t.name.clone()), "\n");
    }
}
