//! Visibility decisions made at move time.
//!
//! A card's face reaches the viewer only through one of these functions.
//! Each returns the selection key the move reads and the destination
//! attributes it writes, so callers cannot mix up "find this card" with
//! "reveal this card".

use super::attributes::{CardOverride, CardSelector};
use super::descriptor::CardDescriptor;
use crate::core::Role;

/// Selection key plus destination attributes for one card transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub select: CardSelector,
    pub apply: CardOverride,
}

/// A face-up table card moving into `role`'s hand.
///
/// The viewer keeps the identity of cards entering their own hand; cards
/// entering an opponent's hand lose rank and suit.
#[must_use]
pub fn table_to_hand(role: Role, card: &CardDescriptor) -> Transfer {
    Transfer {
        select: CardSelector::from_descriptor(card),
        apply: match role {
            Role::Viewer => CardOverride::keep(),
            Role::Opponent => CardOverride::conceal(),
        },
    }
}

/// A card leaving `role`'s hand face-up (played to the table or revealed
/// at round end).
///
/// The viewer's own cards are already known, so the full descriptor is the
/// selection key. An opponent's hand cards are unknown locally: they are
/// selected by back only and the descriptor's face becomes the destination
/// attribute.
#[must_use]
pub fn hand_to_public(role: Role, card: &CardDescriptor) -> Transfer {
    match (role, card.face) {
        (Role::Viewer, _) | (Role::Opponent, None) => Transfer {
            select: CardSelector::from_descriptor(card),
            apply: CardOverride::keep(),
        },
        (Role::Opponent, Some(face)) => Transfer {
            select: CardSelector::by_back(card.back.clone()),
            apply: CardOverride::reveal(face),
        },
    }
}

/// Destination attributes for a card dealt from the deck into `role`'s
/// hand. An opponent's card is always inserted face-down, whatever the
/// descriptor says.
#[must_use]
pub fn deck_to_hand(role: Role, card: &CardDescriptor) -> CardOverride {
    let apply = match (role, card.face) {
        (Role::Viewer, Some(face)) => CardOverride::reveal(face),
        _ => CardOverride::conceal(),
    };
    apply.with_back(card.back.clone())
}

/// Destination attributes for a card dealt face-up onto the table.
#[must_use]
pub fn deck_to_table(card: &CardDescriptor) -> CardOverride {
    let apply = match card.face {
        Some(face) => CardOverride::reveal(face),
        None => CardOverride::conceal(),
    };
    apply.with_back(card.back.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Back, FaceChange};

    #[test]
    fn test_table_to_hand_strips_for_opponent() {
        let card: CardDescriptor = "7-clubs".parse().unwrap();

        let own = table_to_hand(Role::Viewer, &card);
        assert_eq!(own.apply.face, FaceChange::Keep);
        assert_eq!(own.select.face, card.face);

        let theirs = table_to_hand(Role::Opponent, &card);
        assert_eq!(theirs.apply.face, FaceChange::Conceal);
        assert_eq!(theirs.select.face, card.face);
    }

    #[test]
    fn test_hand_to_public_opponent_selects_by_back() {
        let card: CardDescriptor = "K-spades-br".parse().unwrap();
        let transfer = hand_to_public(Role::Opponent, &card);

        assert_eq!(transfer.select.face, None);
        assert_eq!(transfer.select.back, Some(Back::new("br")));
        assert_eq!(transfer.apply.face, FaceChange::Reveal(card.face.unwrap()));
    }

    #[test]
    fn test_hand_to_public_viewer_selects_by_descriptor() {
        let card: CardDescriptor = "K-spades".parse().unwrap();
        let transfer = hand_to_public(Role::Viewer, &card);

        assert_eq!(transfer.select.face, card.face);
        assert_eq!(transfer.apply.face, FaceChange::Keep);
    }

    #[test]
    fn test_deck_to_hand_never_reveals_opponent() {
        let card: CardDescriptor = "3-hearts".parse().unwrap();
        assert_eq!(deck_to_hand(Role::Opponent, &card).face, FaceChange::Conceal);
        assert_eq!(
            deck_to_hand(Role::Viewer, &card).face,
            FaceChange::Reveal(card.face.unwrap())
        );
    }
}
