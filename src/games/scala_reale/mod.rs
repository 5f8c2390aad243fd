//! Scala Reale client.
//!
//! Two players hold 14-card hands; the table shows the current card with
//! one cushioning card beneath it. On their turn a player draws from the
//! deck or takes the table's top card, then plays a card from their hand.
//! The round ends when a hand forms a full run, at which point the
//! winner's cards are revealed one by one.
//!
//! The client only mirrors what the server announces: it never decides
//! legality, it applies every command in order and routes clicks while a
//! phase is waiting for input.

mod client;
mod results;

pub use client::ScalaRealeClient;
pub use results::{ResultRow, ResultsTable, PLACEHOLDER};
