//! Card descriptors - the wire identity of a card.
//!
//! A descriptor carries rank and suit (the face) and optionally a back
//! skin. A card whose face is absent is face-down: that is how hidden
//! information is represented, there is no separate flag.
//!
//! ## Wire format
//!
//! - `5-hearts` - face-up
//! - `5-hearts-br` - face-up with back skin `br`
//! - `br` - face-down, back skin only
//! - the empty string - nothing known at all
//!
//! ```
//! use carte_sync::cards::{CardDescriptor, Rank, Suit};
//!
//! let card: CardDescriptor = "K-spades".parse().unwrap();
//! assert_eq!(card.rank(), Some(Rank::King));
//! assert_eq!(card.suit(), Some(Suit::Spades));
//! assert_eq!(card.to_string(), "K-spades");
//!
//! let hidden: CardDescriptor = "br".parse().unwrap();
//! assert!(hidden.is_face_down());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::DescriptorError;

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    pub const ALL: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Joker,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rank::Ace => "1",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Joker => "X",
        }
    }
}

impl FromStr for Rank {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or_else(|| DescriptorError::UnknownRank(s.to_string()))
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

impl FromStr for Suit {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.as_str() == s)
            .ok_or_else(|| DescriptorError::UnknownSuit(s.to_string()))
    }
}

/// The visible face of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    pub rank: Rank,
    pub suit: Suit,
}

impl Face {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.rank.as_str(), self.suit.as_str())
    }
}

/// Back skin identity (e.g. `br`, `blue`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Back(pub String);

impl Back {
    pub fn new(back: impl Into<String>) -> Self {
        Self(back.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Back {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable-by-value card identity, as carried by protocol messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardDescriptor {
    pub face: Option<Face>,
    pub back: Option<Back>,
}

impl CardDescriptor {
    /// A face-up descriptor without back information.
    #[must_use]
    pub const fn face_up(rank: Rank, suit: Suit) -> Self {
        Self {
            face: Some(Face::new(rank, suit)),
            back: None,
        }
    }

    /// A face-down descriptor showing only its back.
    pub fn face_down(back: Back) -> Self {
        Self {
            face: None,
            back: Some(back),
        }
    }

    /// Attach a back skin.
    #[must_use]
    pub fn with_back(mut self, back: Back) -> Self {
        self.back = Some(back);
        self
    }

    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        self.face.map(|face| face.rank)
    }

    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.face.map(|face| face.suit)
    }

    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.face.is_none()
    }
}

impl FromStr for CardDescriptor {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [""] => Ok(Self::default()),
            [back] => Ok(Self::face_down(Back::new(*back))),
            [rank, suit] => Ok(Self::face_up(rank.parse()?, suit.parse()?)),
            [rank, suit, back] if !back.is_empty() => {
                Ok(Self::face_up(rank.parse()?, suit.parse()?).with_back(Back::new(*back)))
            }
            _ => Err(DescriptorError::Malformed(s.to_string())),
        }
    }
}

impl std::fmt::Display for CardDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.face, &self.back) {
            (Some(face), Some(back)) => write!(f, "{face}-{back}"),
            (Some(face), None) => write!(f, "{face}"),
            (None, Some(back)) => write!(f, "{back}"),
            (None, None) => Ok(()),
        }
    }
}

impl TryFrom<String> for CardDescriptor {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardDescriptor> for String {
    fn from(descriptor: CardDescriptor) -> Self {
        descriptor.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_face_up() {
        let card: CardDescriptor = "1-diamonds".parse().unwrap();
        assert_eq!(card.face, Some(Face::new(Rank::Ace, Suit::Diamonds)));
        assert_eq!(card.back, None);
    }

    #[test]
    fn test_parse_with_back() {
        let card: CardDescriptor = "10-clubs-blue".parse().unwrap();
        assert_eq!(card.rank(), Some(Rank::Ten));
        assert_eq!(card.back, Some(Back::new("blue")));
        assert_eq!(card.to_string(), "10-clubs-blue");
    }

    #[test]
    fn test_parse_back_only() {
        let card: CardDescriptor = "r".parse().unwrap();
        assert!(card.is_face_down());
        assert_eq!(card.back, Some(Back::new("r")));
        assert_eq!(card.to_string(), "r");
    }

    #[test]
    fn test_parse_empty() {
        let card: CardDescriptor = "".parse().unwrap();
        assert_eq!(card, CardDescriptor::default());
        assert_eq!(card.to_string(), "");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "0-hearts".parse::<CardDescriptor>(),
            Err(DescriptorError::UnknownRank("0".into()))
        );
        assert_eq!(
            "5-stars".parse::<CardDescriptor>(),
            Err(DescriptorError::UnknownSuit("stars".into()))
        );
        assert!(matches!(
            "5-hearts-br-extra".parse::<CardDescriptor>(),
            Err(DescriptorError::Malformed(_))
        ));
        assert!(matches!(
            "5-hearts-".parse::<CardDescriptor>(),
            Err(DescriptorError::Malformed(_))
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let card = CardDescriptor::face_up(Rank::Queen, Suit::Hearts);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Q-hearts\"");
        let back: CardDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
