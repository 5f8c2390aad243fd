//! The rendering side of the transition seam.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::TransitionBatch;

/// How a batch is played back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationMode {
    /// Play the batch over the configured duration.
    Animated,
    /// Jump to the end state at once.
    Instant,
}

impl AnimationMode {
    #[must_use]
    pub const fn from_flag(animations: bool) -> Self {
        if animations {
            AnimationMode::Animated
        } else {
            AnimationMode::Instant
        }
    }
}

/// Plays transition batches.
///
/// `animate` must not return before the batch has visually completed.
#[async_trait]
pub trait Animator: Send {
    async fn animate(&mut self, batch: &TransitionBatch, mode: AnimationMode);

    /// Hold the pipeline for a fixed delay between sequential steps.
    async fn pace(&mut self, delay: Duration);
}

/// Animator that takes a fixed wall-clock duration per batch.
#[derive(Clone, Debug)]
pub struct TimedAnimator {
    duration: Duration,
}

impl TimedAnimator {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[async_trait]
impl Animator for TimedAnimator {
    async fn animate(&mut self, batch: &TransitionBatch, mode: AnimationMode) {
        if batch.is_empty() || mode == AnimationMode::Instant {
            return;
        }
        trace!(transitions = batch.len(), "animating batch");
        tokio::time::sleep(self.duration).await;
    }

    async fn pace(&mut self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Animator that completes every batch immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantAnimator;

#[async_trait]
impl Animator for InstantAnimator {
    async fn animate(&mut self, batch: &TransitionBatch, _mode: AnimationMode) {
        trace!(transitions = batch.len(), "skipping batch");
    }

    async fn pace(&mut self, _delay: Duration) {}
}
