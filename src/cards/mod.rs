//! Card system: descriptors, attributes, on-screen instances, visibility.
//!
//! ## Key Types
//!
//! - `CardDescriptor`: wire identity (rank, suit, optional back)
//! - `CardSelector` / `CardOverride`: what a move reads and what it writes
//! - `CardTag`: transient UI tag (hold-lock)
//! - `CardInstance`: a card on screen
//! - `ClickTarget`: positional snapshot used by click routing

pub mod attributes;
pub mod descriptor;
pub mod instance;
pub mod visibility;

pub use attributes::{CardOverride, CardSelector, CardTag, CardTags, FaceChange};
pub use descriptor::{Back, CardDescriptor, Face, Rank, Suit};
pub use instance::{CardInstance, ClickTarget, Position};
pub use visibility::Transfer;
