//! Game engine and state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Tally, Transition};
use crate::shoe::Shoe;
use crate::sync::Mutex;

mod actions;
mod dealer;
pub mod state;

pub(crate) use state::Action;
pub use state::GameState;

/// A single-player blackjack engine that manages one round at a time and
/// a running tally across rounds.
///
/// The engine owns the shoe and both hands. The caller drives it through
/// [`Game::play`], [`Game::hit`], [`Game::stand`] and [`Game::init`], then
/// reads the state and the hands to render. Use [`GameOptions`] to adjust
/// the dealer threshold and the opening deal size.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// The player's hand.
    pub player_hand: Mutex<Hand>,
    /// The dealer's hand.
    pub dealer_hand: Mutex<Hand>,
    /// The card source.
    pub shoe: Mutex<Shoe>,
    /// Running win/loss counts.
    pub tally: Mutex<Tally>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The game starts in [`GameState::Init`] with empty hands and a zero
    /// tally.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjsolo::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::Init),
            player_hand: Mutex::new(Hand::new()),
            dealer_hand: Mutex::new(Hand::new()),
            shoe: Mutex::new(Shoe::new(seed)),
            tally: Mutex::new(Tally::default()),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the current win/loss tally.
    pub fn tally(&self) -> Tally {
        *self.tally.lock()
    }

    /// Returns a clone of the player's hand.
    pub fn get_player_hand(&self) -> Hand {
        self.player_hand.lock().clone()
    }

    /// Returns a clone of the dealer's hand.
    pub fn get_dealer_hand(&self) -> Hand {
        self.dealer_hand.lock().clone()
    }

    /// Returns the player's current hand value.
    pub fn player_value(&self) -> u8 {
        self.player_hand.lock().value()
    }

    /// Returns the dealer's current hand value.
    pub fn dealer_value(&self) -> u8 {
        self.dealer_hand.lock().value()
    }

    /// Clears both hands between rounds.
    ///
    /// Hands may only be cleared while the machine sits in
    /// [`GameState::Init`]; in any other state this does nothing, the same
    /// way an undefined action is ignored. Call [`Game::init`] first after
    /// a settled round.
    pub fn clear_hands(&self) {
        if self.state() != GameState::Init {
            return;
        }
        self.player_hand.lock().reset();
        self.dealer_hand.lock().reset();
    }

    /// Draws cards from the shoe straight into the player's hand.
    pub(super) fn player_draw(&self, count: usize) -> Vec<Card> {
        let cards = self.shoe.lock().draw(count);
        self.player_hand.lock().add_cards(&cards);
        cards
    }

    /// Moves the machine to `next` and produces the transition record.
    pub(super) fn transition_to(&self, next: GameState, tally: Option<Tally>) -> Transition {
        let mut state = self.state.lock();
        let previous = *state;
        *state = next;
        Transition {
            previous,
            current: next,
            tally,
        }
    }
}
