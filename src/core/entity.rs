//! On-screen card identity.
//!
//! Every card instance the container model places on screen gets an
//! `EntityId`. Ids are allocated by the model in increasing order and are
//! never reused within a round, so a rendering layer can key its visuals
//! on them across moves.
//!
//! ```
//! use carte_sync::core::EntityId;
//!
//! let mut next = EntityId::FIRST;
//! let a = next.advance();
//! let b = next.advance();
//! assert_ne!(a, b);
//! assert_eq!(a.raw() + 1, b.raw());
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a card instance placed by the container model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// First id handed out after a reset.
    pub const FIRST: EntityId = EntityId(1);

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Return the current id and step the counter to the next one.
    pub fn advance(&mut self) -> EntityId {
        let current = *self;
        self.0 += 1;
        current
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_monotonic() {
        let mut counter = EntityId::FIRST;
        let ids: Vec<_> = (0..4).map(|_| counter.advance()).collect();
        assert_eq!(ids, vec![EntityId(1), EntityId(2), EntityId(3), EntityId(4)]);
        assert_eq!(counter, EntityId(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Card#42");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
