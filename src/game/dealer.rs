use alloc::vec::Vec;

use crate::card::Card;

use super::Game;

impl Game {
    /// Draws `count` cards for the dealer, subject to the stand threshold.
    ///
    /// The dealer draws only while its hand value is strictly below
    /// `options.dealer_stand_min`; at or above it the dealer stands and
    /// nothing is drawn. The threshold is checked once per invocation,
    /// before any card is added, so a multi-card request adds either all
    /// of the cards or none of them.
    ///
    /// Returns the cards drawn (empty when the dealer stands).
    pub fn dealer_draw(&self, count: usize) -> Vec<Card> {
        if self.dealer_hand.lock().value() >= self.options.dealer_stand_min {
            return Vec::new();
        }

        let cards = self.shoe.lock().draw(count);
        self.dealer_hand.lock().add_cards(&cards);
        cards
    }
}
