//! Inbound command dispatch.
//!
//! The dispatcher takes server frames in arrival order and runs each one
//! to completion, transitions included, before looking at the next. A
//! frame that fails to decode or whose handler fails is logged and
//! skipped; it never stops the stream.
//!
//! ## Key Types
//!
//! - `CommandDispatcher`: frame → handler routing with per-outcome counts
//! - `Session`: event loop over server frames, clicks, and outbound frames

mod session;

pub use session::{Session, SessionHandle};

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::core::EngineError;
use crate::games::scala_reale::ScalaRealeClient;
use crate::protocol::{Command, CommandKind, Frame};
use crate::surface::CardSurface;
use crate::transitions::{Animator, TimedAnimator};
use crate::zones::ContainerModel;

/// What happened to one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatched {
    Handled(CommandKind),
    /// The name is not in the command table.
    Unknown(String),
    Failed {
        kind: CommandKind,
        error: EngineError,
    },
}

/// Frame counts by outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub handled: u64,
    pub unknown: u64,
    pub failed: u64,
}

/// Routes inbound frames to the client's handlers, strictly in order.
#[derive(Debug)]
pub struct CommandDispatcher<S = ContainerModel, A = TimedAnimator> {
    client: ScalaRealeClient<S, A>,
    stats: DispatchStats,
}

impl<S: CardSurface, A: Animator> CommandDispatcher<S, A> {
    pub fn new(client: ScalaRealeClient<S, A>) -> Self {
        Self {
            client,
            stats: DispatchStats::default(),
        }
    }

    pub fn client(&self) -> &ScalaRealeClient<S, A> {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut ScalaRealeClient<S, A> {
        &mut self.client
    }

    pub fn into_client(self) -> ScalaRealeClient<S, A> {
        self.client
    }

    #[must_use]
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Split and dispatch a raw `name|arg|...` frame.
    pub async fn dispatch_frame(&mut self, frame: &str) -> Dispatched {
        self.dispatch(&Frame::parse(frame)).await
    }

    /// Decode a frame and run its handler to completion.
    pub async fn dispatch(&mut self, frame: &Frame) -> Dispatched {
        let Some(kind) = frame.kind() else {
            warn!(command = %frame.name, "unknown command");
            self.stats.unknown += 1;
            return Dispatched::Unknown(frame.name.clone());
        };

        debug!(command = %kind, args = ?frame.args, "dispatching");
        let result = match Command::decode(kind, &frame.args) {
            Ok(command) => self.client.handle(command).await,
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(()) => {
                self.stats.handled += 1;
                Dispatched::Handled(kind)
            }
            Err(err) => {
                error!(command = %kind, error = %err, "command failed");
                self.stats.failed += 1;
                Dispatched::Failed { kind, error: err }
            }
        }
    }

    /// Dispatch every frame from `frames` until the sender side closes.
    pub async fn run(&mut self, mut frames: mpsc::Receiver<String>) {
        while let Some(frame) = frames.recv().await {
            self.dispatch_frame(&frame).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CommandError, ContainerKey, DescriptorError, EngineConfig};
    use crate::transitions::InstantAnimator;

    fn dispatcher() -> CommandDispatcher<ContainerModel, InstantAnimator> {
        let config = EngineConfig::default();
        CommandDispatcher::new(ScalaRealeClient::with_parts(
            ContainerModel::new(&config),
            InstantAnimator,
            config,
        ))
    }

    #[tokio::test]
    async fn test_unknown_command_is_skipped() {
        let mut dispatcher = dispatcher();

        assert_eq!(
            dispatcher.dispatch_frame("shuffle|3").await,
            Dispatched::Unknown("shuffle".to_string())
        );
        assert_eq!(
            dispatcher.dispatch_frame("begin").await,
            Dispatched::Handled(CommandKind::Begin)
        );
        assert_eq!(dispatcher.stats().unknown, 1);
        assert_eq!(dispatcher.stats().handled, 1);
    }

    #[tokio::test]
    async fn test_malformed_descriptor_aborts_only_that_command() {
        let mut dispatcher = dispatcher();
        dispatcher.dispatch_frame("begin").await;
        dispatcher.dispatch_frame("init_deck|40|br").await;

        let outcome = dispatcher.dispatch_frame("draw_to_table|1-stars").await;
        assert_eq!(
            outcome,
            Dispatched::Failed {
                kind: CommandKind::DealToTable,
                error: EngineError::Command(CommandError::Descriptor(
                    DescriptorError::UnknownSuit("stars".to_string())
                )),
            }
        );
        assert_eq!(dispatcher.client().surface().deck().remaining(), 40);

        dispatcher.dispatch_frame("draw_to_table|2-clubs").await;
        assert_eq!(dispatcher.client().surface().count(ContainerKey::TABLE), 1);
        assert_eq!(dispatcher.stats().failed, 1);
    }

    #[tokio::test]
    async fn test_run_drains_channel_in_order() {
        let mut dispatcher = dispatcher();
        let (tx, rx) = mpsc::channel(8);
        for frame in ["begin", "init_deck|10|br", "draw_to_table|3-hearts", "draw_to_table|4-hearts", "draw_to_table|5-hearts"] {
            tx.send(frame.to_string()).await.unwrap();
        }
        drop(tx);

        dispatcher.run(rx).await;

        let table = dispatcher.client().surface().descriptors(ContainerKey::TABLE);
        assert_eq!(table, vec!["4-hearts-br".parse().unwrap(), "5-hearts-br".parse().unwrap()]);
        assert_eq!(dispatcher.client().surface().deck().remaining(), 7);
    }
}
