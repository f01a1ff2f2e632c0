//! Error types.
//!
//! Game actions themselves never fail: an action that is not defined for
//! the current state is ignored and reported as `None`, not as an error.
//! The only fallible surface is parsing a rank from its printed form.

use thiserror::Error;

/// Error returned when a string is not a recognized card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized card rank")]
pub struct ParseRankError;
