//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs blackjack rounds against a
//! scripted dealer: dealing, hit/stand decisions, the dealer's
//! draw-below-17 policy, and win/lose settlement with a running tally.
//! Presentation is left to the caller, which drives the engine through
//! [`Game::play`], [`Game::hit`], [`Game::stand`] and [`Game::init`] and
//! renders from the returned [`Transition`] records and the hand views.
//!
//! # Example
//!
//! ```no_run
//! use bjsolo::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.play();
//! assert_eq!(game.state(), GameState::Playing);
//! let settled = game.stand();
//! let _ = settled;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
mod sync;

// Re-export main types
pub use card::{Card, RANKS, Rank};
pub use error::ParseRankError;
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{Tally, Transition};
pub use shoe::Shoe;
