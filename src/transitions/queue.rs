//! FIFO, single-flight transition executor.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::trace;

use super::animator::{AnimationMode, Animator};
use super::TransitionBatch;
use crate::surface::CardSurface;

/// Plays recorded transitions one batch at a time, in submission order.
///
/// The queue is owned by the game client and driven through `&mut self`,
/// so at most one batch is ever in flight. `run` and `barrier` only
/// return once everything submitted so far has visually completed.
#[derive(Debug)]
pub struct TransitionQueue<A> {
    animator: A,
    pending: VecDeque<TransitionBatch>,
    mode: AnimationMode,
    /// Batches played since construction.
    completed: u64,
}

impl<A: Animator> TransitionQueue<A> {
    #[must_use]
    pub fn new(animator: A, animations: bool) -> Self {
        Self {
            animator,
            pending: VecDeque::new(),
            mode: AnimationMode::from_flag(animations),
            completed: 0,
        }
    }

    #[must_use]
    pub fn animations(&self) -> bool {
        self.mode == AnimationMode::Animated
    }

    /// Switch between animated and instant playback for later batches.
    pub fn set_animations(&mut self, animations: bool) {
        self.mode = AnimationMode::from_flag(animations);
    }

    #[must_use]
    pub fn completed(&self) -> u64 {
        self.completed
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Append a batch. Empty batches are dropped.
    pub fn submit(&mut self, batch: TransitionBatch) {
        if !batch.is_empty() {
            self.pending.push_back(batch);
        }
    }

    /// Play every pending batch to completion.
    pub async fn settle(&mut self) {
        while let Some(batch) = self.pending.pop_front() {
            trace!(transitions = batch.len(), mode = ?self.mode, "playing batch");
            self.animator.animate(&batch, self.mode).await;
            self.completed += 1;
        }
    }

    /// Apply a mutation to the surface, then play what it recorded.
    ///
    /// Transitions recorded before a failure are still played, so the
    /// screen always catches up with the model.
    pub async fn run<S, T, E, F>(&mut self, surface: &mut S, mutate: F) -> Result<T, E>
    where
        S: CardSurface,
        F: FnOnce(&mut S) -> Result<T, E>,
    {
        let result = mutate(surface);
        self.barrier(surface).await;
        result
    }

    /// Play everything the surface has recorded so far.
    pub async fn barrier<S: CardSurface>(&mut self, surface: &mut S) {
        self.submit(surface.take_transitions());
        self.settle().await;
    }

    /// Wait between sequential steps. No-op when animations are off.
    pub async fn pace(&mut self, delay: Duration) {
        if self.mode == AnimationMode::Animated {
            self.animator.pace(delay).await;
        }
    }
}
