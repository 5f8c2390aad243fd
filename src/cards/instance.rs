//! Card instances - on-screen card state.
//!
//! `CardInstance` is one card as the local viewer currently sees it: its
//! known face (if any), its back, the container it sits in, and its UI
//! tags. The container model owns every instance and rewrites these
//! fields on each move.
//!
//! `ClickTarget` is the positional snapshot the rendering layer hands to
//! click routing: where the clicked card sits, its slot, the size of its
//! stack, and what the viewer knows about it.

use serde::{Deserialize, Serialize};

use super::attributes::{CardOverride, CardTags};
use super::descriptor::{Back, CardDescriptor, Face};
use crate::core::{ContainerKey, EntityId, Role};

/// A card on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Rank and suit, when known to the viewer.
    pub face: Option<Face>,

    /// Back skin.
    pub back: Back,

    /// Current container.
    pub container: ContainerKey,

    /// Player the card came from, for cards in shared containers.
    pub origin: Option<Role>,

    /// Transient UI tags.
    #[serde(default)]
    pub tags: CardTags,
}

impl CardInstance {
    /// Create an instance from a descriptor, filling in the back when the
    /// descriptor does not carry one.
    #[must_use]
    pub fn new(
        entity_id: EntityId,
        descriptor: &CardDescriptor,
        fallback_back: &Back,
        container: ContainerKey,
    ) -> Self {
        Self {
            entity_id,
            face: descriptor.face,
            back: descriptor
                .back
                .clone()
                .unwrap_or_else(|| fallback_back.clone()),
            container,
            origin: None,
            tags: CardTags::default(),
        }
    }

    /// What the viewer knows about this card, in wire form.
    #[must_use]
    pub fn descriptor(&self) -> CardDescriptor {
        CardDescriptor {
            face: self.face,
            back: Some(self.back.clone()),
        }
    }

    /// Check if rank and suit are unknown to the viewer.
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.face.is_none()
    }

    /// Apply destination attributes on insertion.
    pub fn apply(&mut self, change: &CardOverride) {
        self.face = change.face.apply(self.face);
        if let Some(back) = &change.back {
            self.back = back.clone();
        }
        if change.origin.is_some() {
            self.origin = change.origin;
        }
    }
}

/// Where a clickable card sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// The deck's top card.
    Deck,
    /// A card in a named container.
    Container(ContainerKey),
}

/// Positional attributes of a clicked card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickTarget {
    pub position: Position,
    /// Slot index within its container, 0 = bottom.
    pub slot: usize,
    /// Number of cards in its container.
    pub stack_size: usize,
    pub descriptor: CardDescriptor,
    #[serde(default)]
    pub tags: CardTags,
}

impl ClickTarget {
    /// The deck, showing `back`.
    #[must_use]
    pub fn deck(back: Back) -> Self {
        Self {
            position: Position::Deck,
            slot: 0,
            stack_size: 1,
            descriptor: CardDescriptor::face_down(back),
            tags: CardTags::default(),
        }
    }

    /// Check whether the card is the last-positioned card of its stack.
    #[must_use]
    pub fn is_topmost(&self) -> bool {
        self.slot + 1 >= self.stack_size
    }
}
