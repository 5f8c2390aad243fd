//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::time::Duration;

use async_trait::async_trait;
use carte_sync::core::{EngineConfig, PlayerId};
use carte_sync::games::scala_reale::ScalaRealeClient;
use carte_sync::protocol::Frame;
use carte_sync::transitions::{AnimationMode, Animator, Transition, TransitionBatch};
use carte_sync::zones::ContainerModel;

/// One thing the animator was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimatorEvent {
    Batch {
        transitions: Vec<Transition>,
        mode: AnimationMode,
    },
    Pace(Duration),
}

/// Animator that records every call and otherwise behaves like the timed
/// animator, so tests can run on paused virtual time.
#[derive(Clone, Debug)]
pub struct RecordingAnimator {
    duration: Duration,
    events: Vec<AnimatorEvent>,
}

impl RecordingAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[AnimatorEvent] {
        &self.events
    }

    pub fn batches(&self) -> Vec<&[Transition]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                AnimatorEvent::Batch { transitions, .. } => Some(transitions.as_slice()),
                AnimatorEvent::Pace(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[async_trait]
impl Animator for RecordingAnimator {
    async fn animate(&mut self, batch: &TransitionBatch, mode: AnimationMode) {
        self.events.push(AnimatorEvent::Batch {
            transitions: batch.iter().cloned().collect(),
            mode,
        });
        if mode == AnimationMode::Animated {
            tokio::time::sleep(self.duration).await;
        }
    }

    async fn pace(&mut self, delay: Duration) {
        self.events.push(AnimatorEvent::Pace(delay));
        tokio::time::sleep(delay).await;
    }
}

pub type TestClient = ScalaRealeClient<ContainerModel, RecordingAnimator>;

pub const VIEWER: PlayerId = PlayerId::new(0);
pub const OPPONENT: PlayerId = PlayerId::new(1);

/// A client seated as player 0 with default timing (400 ms batches,
/// 100 ms reveal pacing).
pub fn client() -> TestClient {
    client_with(EngineConfig::default())
}

pub fn client_with(config: EngineConfig) -> TestClient {
    let animator = RecordingAnimator::new(config.transition_duration());
    let mut client = ScalaRealeClient::with_parts(ContainerModel::new(&config), animator, config);
    client.seat(VIEWER);
    client
}

/// Decode and apply frames in order, failing the test on any error.
pub async fn feed(client: &mut TestClient, frames: &[&str]) {
    for frame in frames {
        let command = Frame::parse(frame)
            .decode()
            .unwrap_or_else(|err| panic!("{frame}: {err}"))
            .unwrap_or_else(|| panic!("{frame}: unknown command"));
        client
            .handle(command)
            .await
            .unwrap_or_else(|err| panic!("{frame}: {err}"));
    }
}
