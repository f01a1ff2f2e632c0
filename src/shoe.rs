//! The card source.
//!
//! Draws are modeled as an infinite shoe: every card is chosen uniformly
//! and independently from the nine-entry draw table, with replacement.
//! Nothing depletes and no reshuffle exists.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANKS};

/// An infinite shoe drawing uniformly from [`RANKS`].
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Predetermined cards yielded before any random draw.
    stacked: VecDeque<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a new shoe with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stacked: VecDeque::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws `count` cards. A count of zero yields an empty sequence.
    ///
    /// Stacked cards are yielded first, in the order they were stacked;
    /// after that every card is an independent uniform pick from the
    /// draw table.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self
                .stacked
                .pop_front()
                .unwrap_or_else(|| Card::new(RANKS[self.rng.random_range(0..RANKS.len())]));
            cards.push(card);
        }
        cards
    }

    /// Queues predetermined cards so the next draws yield them in order.
    ///
    /// Test and demo rigging; randomness resumes once the queue runs dry.
    pub fn stack(&mut self, cards: &[Card]) {
        self.stacked.extend(cards.iter().copied());
    }

    /// Returns the number of stacked cards not yet drawn.
    #[must_use]
    pub fn stacked_remaining(&self) -> usize {
        self.stacked.len()
    }
}
