use crate::result::Transition;

use super::{Action, Game, GameState};

impl Game {
    /// Starts a round: deals the opening cards and enters
    /// [`GameState::Playing`].
    ///
    /// The player always receives the opening cards; the dealer's share
    /// passes through the stand threshold, which an empty hand always
    /// clears. Returns `None` (and changes nothing) unless the game is in
    /// [`GameState::Init`].
    pub fn play(&self) -> Option<Transition> {
        self.dispatch(Action::Play)
    }

    /// Player action: draw one more card.
    ///
    /// The dealer then draws one card if still below its threshold, and
    /// the round settles. Returns `None` (and changes nothing) unless the
    /// game is in [`GameState::Playing`].
    pub fn hit(&self) -> Option<Transition> {
        self.dispatch(Action::Hit)
    }

    /// Player action: take no more cards.
    ///
    /// The dealer draws one card if still below its threshold, and the
    /// round settles. Returns `None` (and changes nothing) unless the
    /// game is in [`GameState::Playing`].
    pub fn stand(&self) -> Option<Transition> {
        self.dispatch(Action::Stand)
    }

    /// Returns a settled game to [`GameState::Init`] for the next round.
    ///
    /// Hands are left untouched; call [`Game::clear_hands`] before the
    /// next [`Game::play`]. Returns `None` (and changes nothing) unless
    /// the game is in a settled state.
    pub fn init(&self) -> Option<Transition> {
        self.dispatch(Action::Init)
    }

    /// Looks up the action in the transition table and runs its effect.
    ///
    /// An action that is not defined for the current state is ignored:
    /// no state change, no record, no error.
    fn dispatch(&self, action: Action) -> Option<Transition> {
        match (self.state(), action) {
            (GameState::Init, Action::Play) => Some(self.deal()),
            (GameState::Playing, Action::Hit) => Some(self.player_hit()),
            (GameState::Playing, Action::Stand) => Some(self.player_stand()),
            (GameState::Playing, Action::Blackjack) => Some(self.settle(GameState::Blackjack)),
            (GameState::Playing, Action::Win) => Some(self.settle(GameState::Win)),
            (GameState::Playing, Action::Lose) => Some(self.settle(GameState::Lose)),
            (GameState::Win | GameState::Lose | GameState::Blackjack, Action::Init) => {
                Some(self.transition_to(GameState::Init, None))
            }
            _ => None,
        }
    }

    fn deal(&self) -> Transition {
        let count = usize::from(self.options.starting_cards);
        self.player_draw(count);
        self.dealer_draw(count);
        self.transition_to(GameState::Playing, None)
    }

    fn player_hit(&self) -> Transition {
        self.player_draw(1);
        self.dealer_draw(1);
        self.check_result()
    }

    fn player_stand(&self) -> Transition {
        self.dealer_draw(1);
        self.check_result()
    }

    /// Settles the round from the current hand values.
    ///
    /// The outcome rules run in order and every rule whose condition
    /// holds fires, each overwriting the one before it. The closing
    /// player-versus-dealer comparison is unconditional, so it always has
    /// the last word: a player 21 that does not strictly beat the dealer
    /// settles as a loss, never as a blackjack.
    fn check_result(&self) -> Transition {
        let player_total = self.player_value();
        let dealer_total = self.dealer_value();

        let rules = [
            (player_total == 21, Action::Blackjack),
            (player_total > 21, Action::Lose),
            (dealer_total > 21, Action::Win),
            (
                true,
                if player_total > dealer_total {
                    Action::Win
                } else {
                    Action::Lose
                },
            ),
        ];

        let mut verdict = Action::Lose;
        for (fires, action) in rules {
            if fires {
                verdict = action;
            }
        }

        // SAFETY: check_result only runs from the hit and stand effects,
        // so the state is still Playing and every settling action is
        // defined for it.
        self.dispatch(verdict)
            .expect("settling actions are defined for the playing state")
    }

    /// Applies a settled outcome and bumps the tally.
    fn settle(&self, outcome: GameState) -> Transition {
        let tally = {
            let mut tally = self.tally.lock();
            match outcome {
                GameState::Win | GameState::Blackjack => tally.wins += 1,
                GameState::Lose => tally.losses += 1,
                GameState::Init | GameState::Playing => {}
            }
            *tally
        };

        self.transition_to(outcome, Some(tally))
    }
}
