//! # carte-sync
//!
//! Client-side synchronization engine for Scala Reale, a turn-based card
//! game played against an authoritative server.
//!
//! ## Design Principles
//!
//! 1. **Server Is Ground Truth**: The client never decides legality. It
//!    applies the server's commands in arrival order and renders them.
//!
//! 2. **One Thing At A Time**: A command runs to completion, animations
//!    included, before the next one starts. Clicks are routed between
//!    commands, never during one.
//!
//! 3. **Visibility At Move Time**: A card's face reaches the viewer only
//!    through an explicit decision made when the card moves.
//!
//! ## Architecture
//!
//! - **Composition Over Inheritance**: The game client drives an injected
//!   `CardSurface` (container framework) and `Animator` (renderer).
//!
//! - **Persistent Data Structures**: O(1) container snapshots via `im-rs`
//!   for the rendering layer.
//!
//! - **Closed Command Set**: Wire names resolve through one fixed table to
//!   a `CommandKind`; unknown names are logged and skipped.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players and roles, configuration, errors
//! - `cards`: Descriptors, tags, on-screen instances, visibility rules
//! - `zones`: Container model and deck
//! - `surface`: The container capability trait
//! - `transitions`: Transition queue and animator seam
//! - `protocol`: Inbound and outbound wire commands
//! - `phase`: Phase state machine and click routing
//! - `games`: The Scala Reale client
//! - `dispatch`: Command dispatcher and session loop

pub mod core;
pub mod cards;
pub mod zones;
pub mod surface;
pub mod transitions;
pub mod protocol;
pub mod phase;
pub mod games;
pub mod dispatch;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PlayerId, PlayerMap, Role, Seating,
    ContainerConfig, ContainerKey, ContainerName, EngineConfig,
    CommandError, DescriptorError, EngineError, SessionError, SurfaceError,
};

pub use crate::cards::{
    Back, CardDescriptor, Face, Rank, Suit,
    CardInstance, CardOverride, CardSelector, CardTag, CardTags, ClickTarget, Position, Transfer,
};

pub use crate::zones::{ContainerModel, ContainerSnapshot, Deck};

pub use crate::surface::CardSurface;

pub use crate::transitions::{
    AnimationMode, Animator, InstantAnimator, TimedAnimator,
    Transition, TransitionBatch, TransitionQueue,
};

pub use crate::protocol::{Command, CommandKind, Frame, OutboundCommand};

pub use crate::phase::{Clickable, Phase, PhaseMachine};

pub use crate::games::scala_reale::{ResultsTable, ScalaRealeClient};

pub use crate::dispatch::{CommandDispatcher, DispatchStats, Dispatched, Session, SessionHandle};
