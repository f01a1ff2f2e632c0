//! Hand representation and ace-aware evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        match card.value() {
            Some(v) => value = value.saturating_add(v),
            None => {
                aces += 1;
                value = value.saturating_add(11);
            }
        }
    }

    // Demote aces from 11 to 1 until the total fits. A hand that is still
    // over 21 with every ace at 1 reports that minimum as its busted total.
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// An ordered, append-only hand of cards belonging to one participant.
///
/// The player and the dealer each own an independent `Hand`; the engine
/// never shares one between them.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in insertion order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends cards to the end of the hand.
    pub fn add_cards(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Appends a single card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 where possible without busting, otherwise
    /// as 1. A busted hand reports its minimum possible total, which is
    /// still over 21. The value is a pure function of the card sequence
    /// and is recomputed on every call.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    ///
    /// Meant for use between rounds; [`crate::Game::clear_hands`] applies
    /// the between-rounds gate for both hands at once.
    pub fn reset(&mut self) {
        self.cards.clear();
    }
}
