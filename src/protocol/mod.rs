//! Wire encodings for both directions of the server connection.
//!
//! Frames are plain text: a command name followed by its arguments, all
//! separated by `|`. Argument order is fixed per command.
//!
//! ## Key Types
//!
//! - `Frame`: a raw `name|arg|...` frame, split but not interpreted
//! - `CommandKind`: closed set of inbound command identifiers
//! - `Command`: a decoded inbound command with typed arguments
//! - `OutboundCommand`: what a routed click sends back

pub mod inbound;
pub mod outbound;

pub use inbound::{Command, CommandKind, Frame};
pub use outbound::OutboundCommand;

/// Separator between a frame's name and its arguments.
pub const FRAME_SEPARATOR: char = '|';
