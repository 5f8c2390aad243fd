//! Wire encoding integration tests.

use carte_sync::cards::{Back, CardDescriptor, Face, Rank, Suit};
use carte_sync::protocol::{Command, CommandKind, Frame, OutboundCommand};
use proptest::prelude::*;

fn face() -> impl Strategy<Value = Face> {
    (0usize..13, 0usize..4).prop_map(|(rank, suit)| Face::new(Rank::ALL[rank], Suit::ALL[suit]))
}

fn descriptor() -> impl Strategy<Value = CardDescriptor> {
    (proptest::option::of(face()), proptest::option::of("[a-z]{1,6}")).prop_map(|(face, back)| {
        CardDescriptor {
            face,
            back: back.map(Back::new),
        }
    })
}

proptest! {
    /// Descriptors survive serialize then parse.
    #[test]
    fn prop_descriptor_round_trip(card in descriptor()) {
        let parsed: CardDescriptor = card.to_string().parse().unwrap();
        prop_assert_eq!(parsed, card);
    }

    /// A play frame carries the descriptor unchanged.
    #[test]
    fn prop_play_frame_carries_descriptor(card in descriptor()) {
        let frame = Frame::parse(&OutboundCommand::Play(card.clone()).to_frame());
        prop_assert_eq!(frame.name.as_str(), "play");
        let sent: CardDescriptor = frame.args[0].parse().unwrap();
        prop_assert_eq!(sent, card);
    }
}

/// Every server wire name resolves to the same command as its canonical
/// name.
#[test]
fn test_wire_names_match_canonical_names() {
    let pairs = [
        ("init_deck", "configure_deck"),
        ("turn_status", "announce_phase"),
        ("draw_to_table", "deal_to_table"),
        ("draw_card", "deal_to_hand"),
        ("draw_discarded", "take_from_table"),
        ("discard_prevention", "toggle_hold_lock"),
        ("show_winner_cards", "reveal_winner_cards"),
    ];
    for (wire, canonical) in pairs {
        assert_eq!(CommandKind::lookup(wire), CommandKind::lookup(canonical), "{wire}");
        assert!(CommandKind::lookup(wire).is_some(), "{wire}");
    }
}

/// The optional deck back of a table deal may be absent or empty.
#[test]
fn test_deal_to_table_optional_back() {
    let with_back = Frame::parse("draw_to_table|1-diamonds|red").decode().unwrap();
    let without = Frame::parse("draw_to_table|1-diamonds|").decode().unwrap();

    assert_eq!(
        with_back,
        Some(Command::DealToTable {
            card: CardDescriptor::face_up(Rank::Ace, Suit::Diamonds),
            deck_back: Some(Back::new("red")),
        })
    );
    assert_eq!(
        without,
        Some(Command::DealToTable {
            card: CardDescriptor::face_up(Rank::Ace, Suit::Diamonds),
            deck_back: None,
        })
    );
}
