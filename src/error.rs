//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer's turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for showdown.
    #[error("invalid round state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur when validating a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Input is not a number.
    #[error("not a number")]
    NotANumber,
    /// Wager is zero or negative.
    #[error("wager must be positive")]
    NonPositive,
    /// Wager is larger than the current balance.
    #[error("wager exceeds balance")]
    ExceedsBalance,
    /// Wager is infinite.
    #[error("wager must be a finite amount")]
    NotFinite,
}

/// Errors in session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OptionsError {
    /// Starting balance is not a finite, positive amount.
    #[error("starting balance must be a finite amount above zero, got {0}")]
    InvalidBalance(f64),
}

/// Errors that end a terminal session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum SessionError {
    /// Writing to the terminal failed.
    #[error("terminal output failed: {0}")]
    Io(#[from] std::io::Error),
    /// A player action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer's turn or showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// The session options are invalid.
    #[error(transparent)]
    Options(#[from] OptionsError),
}
