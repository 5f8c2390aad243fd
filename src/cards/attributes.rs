//! Card attributes used by move operations and UI tags.
//!
//! A move names exactly which attributes it reads and which it writes:
//!
//! - `CardSelector`: the selection key. Every field that is `Some` must
//!   match the card on screen.
//! - `CardOverride`: the destination attributes applied on insertion.
//!
//! `CardTag` is a transient UI-only mark on an on-screen instance; it never
//! changes the card's rank or suit.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::descriptor::{Back, CardDescriptor, Face};
use crate::core::Role;

/// Transient UI tag on an on-screen card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTag {
    /// The card was just taken from the table and cannot be played back
    /// this turn.
    HoldLock,
}

/// Set of tags on one card. Almost always empty or a single entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTags(SmallVec<[CardTag; 2]>);

impl CardTags {
    #[must_use]
    pub fn contains(&self, tag: CardTag) -> bool {
        self.0.contains(&tag)
    }

    /// Flip a tag. Returns whether the tag is now present.
    pub fn toggle(&mut self, tag: CardTag) -> bool {
        if let Some(pos) = self.0.iter().position(|&t| t == tag) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(tag);
            true
        }
    }

    /// Remove a tag. Returns whether it was present.
    pub fn remove(&mut self, tag: CardTag) -> bool {
        let before = self.0.len();
        self.0.retain(|t| *t != tag);
        self.0.len() != before
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Selection key for finding cards in a container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSelector {
    pub face: Option<Face>,
    pub back: Option<Back>,
    pub tag: Option<CardTag>,
}

impl CardSelector {
    /// Matches any card.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Matches on every attribute the descriptor carries.
    #[must_use]
    pub fn from_descriptor(descriptor: &CardDescriptor) -> Self {
        Self {
            face: descriptor.face,
            back: descriptor.back.clone(),
            tag: None,
        }
    }

    /// Matches on back skin only; an absent back matches any card.
    #[must_use]
    pub fn by_back(back: Option<Back>) -> Self {
        Self {
            back,
            ..Self::default()
        }
    }

    /// Matches cards carrying a tag.
    #[must_use]
    pub fn tagged(tag: CardTag) -> Self {
        Self {
            tag: Some(tag),
            ..Self::default()
        }
    }

    /// Check a card's attributes against this key.
    #[must_use]
    pub fn matches(&self, face: Option<Face>, back: &Back, tags: &CardTags) -> bool {
        self.face.map_or(true, |f| face == Some(f))
            && self.back.as_ref().map_or(true, |b| b == back)
            && self.tag.map_or(true, |t| tags.contains(t))
    }
}

impl std::fmt::Display for CardSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptor = CardDescriptor {
            face: self.face,
            back: self.back.clone(),
        };
        match self.tag {
            Some(tag) => write!(f, "'{descriptor}' tagged {tag:?}"),
            None => write!(f, "'{descriptor}'"),
        }
    }
}

/// What happens to a card's face when it lands in its destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceChange {
    /// Keep whatever the viewer already knows.
    #[default]
    Keep,
    /// The identity becomes known now.
    Reveal(Face),
    /// Strip rank and suit.
    Conceal,
}

impl FaceChange {
    /// Apply the change to the currently known face.
    #[must_use]
    pub fn apply(self, current: Option<Face>) -> Option<Face> {
        match self {
            FaceChange::Keep => current,
            FaceChange::Reveal(face) => Some(face),
            FaceChange::Conceal => None,
        }
    }
}

/// Destination attributes written by a move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOverride {
    pub face: FaceChange,
    /// Replacement back skin.
    pub back: Option<Back>,
    /// Player the card came from, kept on cards in shared containers.
    pub origin: Option<Role>,
}

impl CardOverride {
    /// Leave every attribute as it is.
    #[must_use]
    pub fn keep() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reveal(face: Face) -> Self {
        Self {
            face: FaceChange::Reveal(face),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn conceal() -> Self {
        Self {
            face: FaceChange::Conceal,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_back(mut self, back: Option<Back>) -> Self {
        self.back = back;
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Role) -> Self {
        self.origin = Some(origin);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn five_of_hearts() -> Face {
        Face::new(Rank::Five, Suit::Hearts)
    }

    #[test]
    fn test_tags_toggle() {
        let mut tags = CardTags::default();
        assert!(tags.toggle(CardTag::HoldLock));
        assert!(tags.contains(CardTag::HoldLock));
        assert!(!tags.toggle(CardTag::HoldLock));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tags_remove() {
        let mut tags = CardTags::default();
        assert!(!tags.remove(CardTag::HoldLock));
        tags.toggle(CardTag::HoldLock);
        assert!(tags.remove(CardTag::HoldLock));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_selector_matches_face_and_back() {
        let back = Back::new("br");
        let tags = CardTags::default();
        let selector = CardSelector::from_descriptor(
            &CardDescriptor::face_up(Rank::Five, Suit::Hearts).with_back(back.clone()),
        );

        assert!(selector.matches(Some(five_of_hearts()), &back, &tags));
        assert!(!selector.matches(None, &back, &tags));
        assert!(!selector.matches(Some(five_of_hearts()), &Back::new("blue"), &tags));
    }

    #[test]
    fn test_selector_by_back_ignores_face() {
        let back = Back::new("br");
        let tags = CardTags::default();

        assert!(CardSelector::by_back(Some(back.clone())).matches(None, &back, &tags));
        assert!(CardSelector::by_back(None).matches(None, &Back::new("blue"), &tags));
    }

    #[test]
    fn test_selector_by_tag() {
        let back = Back::new("br");
        let mut tags = CardTags::default();
        let selector = CardSelector::tagged(CardTag::HoldLock);

        assert!(!selector.matches(None, &back, &tags));
        tags.toggle(CardTag::HoldLock);
        assert!(selector.matches(None, &back, &tags));
    }

    #[test]
    fn test_face_change() {
        let face = five_of_hearts();
        assert_eq!(FaceChange::Keep.apply(Some(face)), Some(face));
        assert_eq!(FaceChange::Conceal.apply(Some(face)), None);
        assert_eq!(FaceChange::Reveal(face).apply(None), Some(face));
    }
}
