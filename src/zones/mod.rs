//! Card containers.
//!
//! Containers are configured, not hardcoded: `EngineConfig` lists them with
//! their capacities and whether they are partitioned per role.
//!
//! ## Key Types
//!
//! - `ContainerModel`: card location tracking and movement
//! - `ContainerSnapshot`: O(1) read-only view for rendering
//! - `Deck`: draw pile with a count and a back skin

pub mod deck;
pub mod manager;

pub use deck::Deck;
pub use manager::{ContainerModel, ContainerSnapshot};
