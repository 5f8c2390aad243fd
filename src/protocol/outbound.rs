//! Client-to-server commands. Only click routing produces these.

use serde::{Deserialize, Serialize};

use super::FRAME_SEPARATOR;
use crate::cards::CardDescriptor;

/// A player action sent to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutboundCommand {
    /// Take the deck's top card.
    DrawCard,
    /// Take the table's top card.
    TakeFromTable,
    /// Play a card from the viewer's hand.
    Play(CardDescriptor),
}

impl OutboundCommand {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            OutboundCommand::DrawCard => "draw_card",
            OutboundCommand::TakeFromTable => "take_from_table",
            OutboundCommand::Play(_) => "play",
        }
    }

    /// Wire frame for this command.
    #[must_use]
    pub fn to_frame(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for OutboundCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutboundCommand::Play(card) => write!(f, "{}{FRAME_SEPARATOR}{card}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_frames() {
        assert_eq!(OutboundCommand::DrawCard.to_frame(), "draw_card");
        assert_eq!(OutboundCommand::TakeFromTable.to_frame(), "take_from_table");
        assert_eq!(
            OutboundCommand::Play(CardDescriptor::face_up(Rank::Queen, Suit::Clubs)).to_frame(),
            "play|Q-clubs"
        );
    }
}
