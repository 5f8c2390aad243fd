//! Visual transitions and their orchestration.
//!
//! Every container mutation records a `Transition`. Handlers hand the
//! recorded transitions to the `TransitionQueue`, which plays them through
//! an `Animator` one batch at a time, in submission order, and only returns
//! once the batch has visually completed. That return is the single
//! suspension point command handlers rely on.
//!
//! ## Key Types
//!
//! - `Transition`: one visual change (move, discard, relayout)
//! - `TransitionBatch`: transitions that animate together
//! - `TransitionQueue`: FIFO single-flight executor
//! - `Animator`: the rendering layer's side of the seam

mod animator;
mod queue;

pub use animator::{AnimationMode, Animator, InstantAnimator, TimedAnimator};
pub use queue::TransitionQueue;

use serde::{Deserialize, Serialize};

use crate::cards::Position;
use crate::core::{ContainerKey, EntityId};

/// One visual change on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A card travels from one place to another.
    Move {
        entity: EntityId,
        from: Position,
        to: ContainerKey,
    },
    /// A card leaves the screen.
    Discard {
        entity: EntityId,
        from: ContainerKey,
    },
    /// A container's remaining cards slide into their new slots.
    Relayout { container: ContainerKey },
}

/// Transitions that animate together as one group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionBatch {
    transitions: Vec<Transition>,
}

impl TransitionBatch {
    #[must_use]
    pub fn new(transitions: Vec<Transition>) -> Self {
        Self { transitions }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }
}

impl From<Vec<Transition>> for TransitionBatch {
    fn from(transitions: Vec<Transition>) -> Self {
        Self::new(transitions)
    }
}
