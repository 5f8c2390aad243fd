//! Server-to-client commands.

use std::str::FromStr;

use super::FRAME_SEPARATOR;
use crate::cards::{Back, CardDescriptor};
use crate::core::{CommandError, PlayerId};
use crate::phase::Phase;

/// A raw inbound frame: name plus positional arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub args: Vec<String>,
}

impl Frame {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a `name|arg|...` frame. Never fails; an empty frame has an
    /// empty name.
    pub fn parse(frame: &str) -> Self {
        let mut parts = frame.trim_end_matches(['\r', '\n']).split(FRAME_SEPARATOR);
        let name = parts.next().unwrap_or_default().to_string();
        Self {
            name,
            args: parts.map(str::to_string).collect(),
        }
    }

    /// Resolve the name through the command table.
    #[must_use]
    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::lookup(&self.name)
    }

    /// Decode into a typed command. `Ok(None)` when the name is not in
    /// the command table.
    pub fn decode(&self) -> Result<Option<Command>, CommandError> {
        self.kind()
            .map(|kind| Command::decode(kind, &self.args))
            .transpose()
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, "{FRAME_SEPARATOR}{arg}")?;
        }
        Ok(())
    }
}

/// Inbound command identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Players,
    PlayerId,
    Animations,
    Begin,
    ConfigureDeck,
    AnnouncePhase,
    DealToTable,
    DealToHand,
    TakeFromTable,
    ToggleHoldLock,
    PlayCard,
    RevealWinnerCards,
    Turn,
    PrepareResults,
    Results,
    Error,
}

/// Every name the client accepts, canonical names first, then the names
/// the game server puts on the wire.
const COMMAND_TABLE: &[(&str, CommandKind)] = &[
    ("players", CommandKind::Players),
    ("player_id", CommandKind::PlayerId),
    ("animations", CommandKind::Animations),
    ("begin", CommandKind::Begin),
    ("configure_deck", CommandKind::ConfigureDeck),
    ("announce_phase", CommandKind::AnnouncePhase),
    ("deal_to_table", CommandKind::DealToTable),
    ("deal_to_hand", CommandKind::DealToHand),
    ("take_from_table", CommandKind::TakeFromTable),
    ("toggle_hold_lock", CommandKind::ToggleHoldLock),
    ("play_card", CommandKind::PlayCard),
    ("reveal_winner_cards", CommandKind::RevealWinnerCards),
    ("turn", CommandKind::Turn),
    ("prepare_results", CommandKind::PrepareResults),
    ("results", CommandKind::Results),
    ("error", CommandKind::Error),
    // server wire names
    ("init_deck", CommandKind::ConfigureDeck),
    ("turn_status", CommandKind::AnnouncePhase),
    ("draw_to_table", CommandKind::DealToTable),
    ("draw_card", CommandKind::DealToHand),
    ("draw_discarded", CommandKind::TakeFromTable),
    ("discard_prevention", CommandKind::ToggleHoldLock),
    ("show_winner_cards", CommandKind::RevealWinnerCards),
];

impl CommandKind {
    /// Look up a wire name. `None` for names outside the table.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        COMMAND_TABLE
            .iter()
            .find(|(wire, _)| *wire == name)
            .map(|&(_, kind)| kind)
    }

    /// Canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        COMMAND_TABLE
            .iter()
            .find(|&&(_, kind)| kind == self)
            .map_or("unknown", |&(wire, _)| wire)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded inbound command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Display names of the seated players, in seat order.
    Players(Vec<String>),
    /// The local viewer's seat.
    PlayerId(PlayerId),
    Animations(bool),
    Begin,
    /// Board-state replays of an empty deck carry no back.
    ConfigureDeck {
        count: usize,
        back: Option<Back>,
        redraw: bool,
    },
    AnnouncePhase(Phase),
    DealToTable {
        card: CardDescriptor,
        deck_back: Option<Back>,
    },
    DealToHand {
        player: PlayerId,
        card: CardDescriptor,
    },
    TakeFromTable {
        player: PlayerId,
        card: CardDescriptor,
    },
    ToggleHoldLock(CardDescriptor),
    PlayCard {
        player: PlayerId,
        card: CardDescriptor,
    },
    RevealWinnerCards {
        player: PlayerId,
        cards: Vec<CardDescriptor>,
    },
    Turn,
    PrepareResults,
    Results(Vec<i64>),
    Error {
        message: String,
        command: Option<String>,
    },
}

impl Command {
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Players(_) => CommandKind::Players,
            Command::PlayerId(_) => CommandKind::PlayerId,
            Command::Animations(_) => CommandKind::Animations,
            Command::Begin => CommandKind::Begin,
            Command::ConfigureDeck { .. } => CommandKind::ConfigureDeck,
            Command::AnnouncePhase(_) => CommandKind::AnnouncePhase,
            Command::DealToTable { .. } => CommandKind::DealToTable,
            Command::DealToHand { .. } => CommandKind::DealToHand,
            Command::TakeFromTable { .. } => CommandKind::TakeFromTable,
            Command::ToggleHoldLock(_) => CommandKind::ToggleHoldLock,
            Command::PlayCard { .. } => CommandKind::PlayCard,
            Command::RevealWinnerCards { .. } => CommandKind::RevealWinnerCards,
            Command::Turn => CommandKind::Turn,
            Command::PrepareResults => CommandKind::PrepareResults,
            Command::Results(_) => CommandKind::Results,
            Command::Error { .. } => CommandKind::Error,
        }
    }

    /// Decode the arguments of a frame whose name resolved to `kind`.
    ///
    /// Extra trailing arguments are ignored.
    pub fn decode(kind: CommandKind, args: &[String]) -> Result<Self, CommandError> {
        let args = Args {
            command: kind.name(),
            args,
        };

        let command = match kind {
            CommandKind::Players => Command::Players(args.args.to_vec()),
            CommandKind::PlayerId => Command::PlayerId(args.parse(0, "player id")?),
            CommandKind::Animations => Command::Animations(args.switch(0)?),
            CommandKind::Begin => Command::Begin,
            CommandKind::ConfigureDeck => Command::ConfigureDeck {
                count: args.parse(0, "card count")?,
                back: args.optional(1).map(Back::new),
                redraw: args.optional(2).map(parse_flag).transpose()?.unwrap_or(false),
            },
            CommandKind::AnnouncePhase => Command::AnnouncePhase(Phase::from_name(args.required(0)?)),
            CommandKind::DealToTable => Command::DealToTable {
                card: args.descriptor(0)?,
                deck_back: args.optional(1).map(Back::new),
            },
            CommandKind::DealToHand => Command::DealToHand {
                player: args.parse(0, "player id")?,
                card: args
                    .optional(1)
                    .map(str::parse::<CardDescriptor>)
                    .transpose()?
                    .unwrap_or_default(),
            },
            CommandKind::TakeFromTable => Command::TakeFromTable {
                player: args.parse(0, "player id")?,
                card: args.descriptor(1)?,
            },
            CommandKind::ToggleHoldLock => Command::ToggleHoldLock(args.descriptor(0)?),
            CommandKind::PlayCard => Command::PlayCard {
                player: args.parse(0, "player id")?,
                card: args.descriptor(1)?,
            },
            CommandKind::RevealWinnerCards => Command::RevealWinnerCards {
                player: args.parse(0, "player id")?,
                cards: args
                    .args
                    .get(1..)
                    .unwrap_or_default()
                    .iter()
                    .map(|card| card.parse::<CardDescriptor>())
                    .collect::<Result<_, _>>()?,
            },
            CommandKind::Turn => Command::Turn,
            CommandKind::PrepareResults => Command::PrepareResults,
            CommandKind::Results => Command::Results(
                (0..args.args.len())
                    .map(|index| args.parse::<i64>(index, "score"))
                    .collect::<Result<_, _>>()?,
            ),
            CommandKind::Error => Command::Error {
                message: args.required(0)?.to_string(),
                command: args.optional(1).map(str::to_string),
            },
        };
        Ok(command)
    }
}

/// Positional argument accessors that name the command in their errors.
struct Args<'a> {
    command: &'static str,
    args: &'a [String],
}

impl<'a> Args<'a> {
    fn required(&self, index: usize) -> Result<&'a str, CommandError> {
        self.args
            .get(index)
            .map(String::as_str)
            .ok_or(CommandError::MissingArgument {
                command: self.command,
                index,
            })
    }

    /// Absent and empty arguments both read as `None`.
    fn optional(&self, index: usize) -> Option<&'a str> {
        self.args
            .get(index)
            .map(String::as_str)
            .filter(|arg| !arg.is_empty() && *arg != "null")
    }

    fn parse<T: FromStr>(&self, index: usize, expected: &'static str) -> Result<T, CommandError> {
        let value = self.required(index)?;
        value.parse().map_err(|_| CommandError::InvalidArgument {
            expected,
            value: value.to_string(),
        })
    }

    fn descriptor(&self, index: usize) -> Result<CardDescriptor, CommandError> {
        Ok(self.required(index)?.parse()?)
    }

    fn switch(&self, index: usize) -> Result<bool, CommandError> {
        match self.required(index)? {
            "on" => Ok(true),
            "off" => Ok(false),
            other => Err(CommandError::InvalidArgument {
                expected: "on or off",
                value: other.to_string(),
            }),
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, CommandError> {
    match value {
        "true" | "True" | "1" => Ok(true),
        "false" | "False" | "0" => Ok(false),
        other => Err(CommandError::InvalidArgument {
            expected: "boolean",
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::DescriptorError;

    fn decode(frame: &str) -> Result<Option<Command>, CommandError> {
        Frame::parse(frame).decode()
    }

    #[test]
    fn test_frame_parse() {
        let frame = Frame::parse("draw_to_table|1-diamonds|blue\n");
        assert_eq!(frame.name, "draw_to_table");
        assert_eq!(frame.args, vec!["1-diamonds", "blue"]);
        assert_eq!(frame.to_string(), "draw_to_table|1-diamonds|blue");

        let empty = Frame::parse("");
        assert_eq!(empty.name, "");
        assert!(empty.args.is_empty());
    }

    #[test]
    fn test_aliases_resolve_to_same_kind() {
        assert_eq!(CommandKind::lookup("init_deck"), Some(CommandKind::ConfigureDeck));
        assert_eq!(CommandKind::lookup("configure_deck"), Some(CommandKind::ConfigureDeck));
        assert_eq!(CommandKind::lookup("draw_discarded"), Some(CommandKind::TakeFromTable));
        assert_eq!(CommandKind::lookup("show_winner_cards"), Some(CommandKind::RevealWinnerCards));
        assert_eq!(CommandKind::lookup("cmdBegin"), None);
        assert_eq!(CommandKind::ConfigureDeck.name(), "configure_deck");
    }

    #[test]
    fn test_decode_configure_deck() {
        assert_eq!(
            decode("init_deck|40|blue").unwrap(),
            Some(Command::ConfigureDeck {
                count: 40,
                back: Some(Back::new("blue")),
                redraw: false,
            })
        );
        assert_eq!(
            decode("init_deck|12|br|True").unwrap(),
            Some(Command::ConfigureDeck {
                count: 12,
                back: Some(Back::new("br")),
                redraw: true,
            })
        );
    }

    #[test]
    fn test_decode_configure_deck_without_back() {
        assert_eq!(
            decode("init_deck|0").unwrap(),
            Some(Command::ConfigureDeck {
                count: 0,
                back: None,
                redraw: false,
            })
        );
    }

    #[test]
    fn test_decode_reveal_keeps_order() {
        let command = decode("show_winner_cards|1|5-hearts|K-spades").unwrap().unwrap();
        assert_eq!(
            command,
            Command::RevealWinnerCards {
                player: PlayerId::new(1),
                cards: vec![
                    CardDescriptor::face_up(Rank::Five, Suit::Hearts),
                    CardDescriptor::face_up(Rank::King, Suit::Spades),
                ],
            }
        );
    }

    #[test]
    fn test_decode_deal_to_hand_without_card() {
        assert_eq!(
            decode("draw_card|0").unwrap(),
            Some(Command::DealToHand {
                player: PlayerId::new(0),
                card: CardDescriptor::default(),
            })
        );
    }

    #[test]
    fn test_decode_unknown_name() {
        assert_eq!(decode("shuffle|3").unwrap(), None);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            decode("draw_discarded|1"),
            Err(CommandError::MissingArgument {
                command: "take_from_table",
                index: 1,
            })
        );
        assert_eq!(
            decode("init_deck|many|br"),
            Err(CommandError::InvalidArgument {
                expected: "card count",
                value: "many".to_string(),
            })
        );
        assert_eq!(
            decode("draw_to_table|1-stars"),
            Err(CommandError::Descriptor(DescriptorError::UnknownSuit(
                "stars".to_string()
            )))
        );
        assert!(decode("animations|maybe").is_err());
    }

    #[test]
    fn test_decode_results() {
        assert_eq!(decode("results|12|-3").unwrap(), Some(Command::Results(vec![12, -3])));
    }
}
