//! Session loop: one event at a time from the server and the UI.

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::CommandDispatcher;
use crate::core::SessionError;
use crate::phase::Clickable;
use crate::surface::CardSurface;
use crate::transitions::Animator;

/// The outside ends of a session's channels.
#[derive(Debug)]
pub struct SessionHandle {
    /// Server frames in.
    pub frames: mpsc::Sender<String>,
    /// UI gestures in.
    pub clicks: mpsc::Sender<Clickable>,
    /// Frames for the server out.
    pub outbound: mpsc::Receiver<String>,
}

/// Drives a dispatcher from server frames and UI clicks.
///
/// Events are handled one at a time, server frames first when both are
/// ready, so a click is never routed while a command handler is running.
#[derive(Debug)]
pub struct Session<S, A> {
    dispatcher: CommandDispatcher<S, A>,
    frames: mpsc::Receiver<String>,
    clicks: mpsc::Receiver<Clickable>,
    outbound: mpsc::Sender<String>,
}

impl<S: CardSurface, A: Animator> Session<S, A> {
    pub fn new(
        dispatcher: CommandDispatcher<S, A>,
        frames: mpsc::Receiver<String>,
        clicks: mpsc::Receiver<Clickable>,
        outbound: mpsc::Sender<String>,
    ) -> Self {
        Self {
            dispatcher,
            frames,
            clicks,
            outbound,
        }
    }

    /// A session with fresh bounded channels, plus their outside ends.
    pub fn with_channels(dispatcher: CommandDispatcher<S, A>, capacity: usize) -> (Self, SessionHandle) {
        let (frames_tx, frames_rx) = mpsc::channel(capacity);
        let (clicks_tx, clicks_rx) = mpsc::channel(capacity);
        let (outbound_tx, outbound_rx) = mpsc::channel(capacity);

        let session = Self::new(dispatcher, frames_rx, clicks_rx, outbound_tx);
        let handle = SessionHandle {
            frames: frames_tx,
            clicks: clicks_tx,
            outbound: outbound_rx,
        };
        (session, handle)
    }

    /// Run until the server side closes. Returns the dispatcher so the
    /// caller can inspect the final state.
    pub async fn run(mut self) -> Result<CommandDispatcher<S, A>, SessionError> {
        let mut clicks_open = true;

        loop {
            tokio::select! {
                biased;

                frame = self.frames.recv() => match frame {
                    Some(frame) => {
                        self.dispatcher.dispatch_frame(&frame).await;
                    }
                    None => break,
                },

                click = self.clicks.recv(), if clicks_open => match click {
                    Some(clicked) => {
                        if let Some(command) = self.dispatcher.client_mut().click(clicked) {
                            debug!(%command, "sending");
                            self.outbound
                                .send(command.to_frame())
                                .await
                                .map_err(|_| SessionError::OutboundClosed)?;
                        }
                    }
                    None => clicks_open = false,
                },
            }
        }

        let stats = self.dispatcher.stats();
        info!(
            handled = stats.handled,
            unknown = stats.unknown,
            failed = stats.failed,
            "session closed"
        );
        Ok(self.dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;
    use crate::games::scala_reale::ScalaRealeClient;
    use crate::transitions::InstantAnimator;
    use crate::zones::ContainerModel;

    fn session() -> (Session<ContainerModel, InstantAnimator>, SessionHandle) {
        let config = EngineConfig::default();
        let client =
            ScalaRealeClient::with_parts(ContainerModel::new(&config), InstantAnimator, config);
        Session::with_channels(CommandDispatcher::new(client), 16)
    }

    #[tokio::test]
    async fn test_click_after_phase_sends_once() {
        let (session, mut handle) = session();
        let task = tokio::spawn(session.run());

        for frame in ["player_id|0", "begin", "init_deck|40|br", "turn_status|draw"] {
            handle.frames.send(frame.to_string()).await.unwrap();
        }
        // let the frames drain before clicking
        tokio::task::yield_now().await;
        while handle.frames.capacity() < handle.frames.max_capacity() {
            tokio::task::yield_now().await;
        }

        handle.clicks.send(Clickable::Deck).await.unwrap();
        handle.clicks.send(Clickable::Deck).await.unwrap();
        drop(handle.clicks);
        assert_eq!(handle.outbound.recv().await.as_deref(), Some("draw_card"));

        drop(handle.frames);
        let dispatcher = task.await.unwrap().unwrap();
        assert!(!dispatcher.client().phase().awaiting_input());
        assert!(handle.outbound.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_outbound_ends_session() {
        let (session, handle) = session();
        let SessionHandle {
            frames,
            clicks,
            outbound,
        } = handle;
        drop(outbound);

        frames.send("turn_status|draw".to_string()).await.unwrap();
        let task = tokio::spawn(session.run());
        while frames.capacity() < frames.max_capacity() {
            tokio::task::yield_now().await;
        }
        clicks.send(Clickable::Deck).await.unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), SessionError::OutboundClosed);
    }
}
