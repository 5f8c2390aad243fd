//! Core engine types: entity ids, players and roles, configuration, errors.
//!
//! Everything else in the crate builds on these; none of them know about
//! a specific game.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;

pub use config::{ContainerConfig, ContainerKey, ContainerName, EngineConfig};
pub use entity::EntityId;
pub use error::{CommandError, DescriptorError, EngineError, SessionError, SurfaceError};
pub use player::{PlayerId, PlayerMap, Role, Seating};
