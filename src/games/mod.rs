//! Game clients built on the engine.

pub mod scala_reale;
