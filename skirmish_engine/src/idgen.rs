//! ** idgen module **
//! Helpers for generating the stable handles used to address characters and items.
//! Every object created during a session gets a random (v4) UUID; names are only unique
//! within their scope, so they are never used as identity.
use uuid::Uuid;

/// Stable handle for an object living in one of the session arenas.
pub type Id = Uuid;

/// Generate a fresh, random id.
pub fn new_id() -> Id {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
