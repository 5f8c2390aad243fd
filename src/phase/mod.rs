//! Interaction phases and click routing.
//!
//! The server announces a phase; the machine then accepts exactly one
//! click that the phase's handler recognizes and turns it into one
//! outbound command. Everything else is ignored without side effects.
//!
//! ## Key Types
//!
//! - `Phase`: open set of phase names, with the ones this game knows
//! - `PhaseMachine`: phase + awaiting-input flag, and the click router
//! - `Clickable`: what the rendering layer reports a gesture landed on

mod machine;

pub use machine::{ClickHandler, PhaseMachine};

use serde::{Deserialize, Serialize};

use crate::core::EntityId;

/// A user gesture target, as reported by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clickable {
    /// The deck's top card.
    Deck,
    /// A card on screen.
    Card(EntityId),
}

/// The currently expected kind of player interaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Phase {
    /// Take a card from the deck or the table.
    Draw,
    /// Play a card from the hand.
    HandPlay,
    /// Round over; the winner's cards are being shown.
    Win,
    /// A phase this client has no click handling for.
    Other(String),
}

impl Phase {
    /// Resolve a wire name. Unrecognized names are kept as `Other`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "draw" => Phase::Draw,
            "hand" | "hand-play" | "hand_play" => Phase::HandPlay,
            "win" => Phase::Win,
            other => Phase::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Phase::Draw => "draw",
            Phase::HandPlay => "hand",
            Phase::Win => "win",
            Phase::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Phase {
    fn from(name: String) -> Self {
        Phase::from_name(&name)
    }
}

impl From<Phase> for String {
    fn from(phase: Phase) -> Self {
        phase.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::from_name("draw"), Phase::Draw);
        assert_eq!(Phase::from_name("hand"), Phase::HandPlay);
        assert_eq!(Phase::from_name("hand-play"), Phase::HandPlay);
        assert_eq!(Phase::from_name("win"), Phase::Win);
        assert_eq!(Phase::from_name("bid"), Phase::Other("bid".to_string()));
        assert_eq!(Phase::HandPlay.to_string(), "hand");
    }
}
