//! Traits shared by the objects that make up a running session.

use crate::idgen::Id;

/// Methods common to any object stored in a session arena or container.
///
/// `id` is the identity of the object: two values with the same id are the same object,
/// whatever their other fields say. `name` is what scripts use to refer to it and what
/// listings are sorted by.
pub trait WorldObject {
    fn id(&self) -> Id;
    fn name(&self) -> &str;
}

/// Orders two world objects by name, the natural order of every listing.
pub fn by_name<T: WorldObject>(a: &T, b: &T) -> std::cmp::Ordering {
    a.name().cmp(b.name())
}
