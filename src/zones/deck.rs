//! The deck: a source container that exposes only a remaining count and a
//! back skin. Individual cards are not addressable until drawn.

use serde::{Deserialize, Serialize};

use crate::cards::Back;

/// Draw pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    remaining: usize,
    back: Back,
}

impl Deck {
    /// An empty deck showing `back`.
    #[must_use]
    pub fn new(back: Back) -> Self {
        Self { remaining: 0, back }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn back(&self) -> &Back {
        &self.back
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    pub fn set_count(&mut self, count: usize) {
        self.remaining = count;
    }

    pub fn set_back(&mut self, back: Back) {
        self.back = back;
    }

    /// Take one card off the top.
    ///
    /// Returns `false` when the deck was already empty; the count stays at
    /// zero.
    pub fn draw(&mut self) -> bool {
        match self.remaining.checked_sub(1) {
            Some(rest) => {
                self.remaining = rest;
                true
            }
            None => false,
        }
    }
}
