//! Error types for advisor operations.

use thiserror::Error;

/// Errors raised when reading a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Token is not one of `2`..`10`, `J`, `Q`, `K`, `A`.
    #[error("invalid card")]
    InvalidCard,
}

/// Errors raised when validating table options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The shoe must hold at least one deck.
    #[error("number of decks must be greater than zero")]
    NoDecks,
}

/// Errors raised when reading an operator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Token does not name an action.
    #[error("unrecognized action")]
    Unrecognized,
}

/// Errors raised by the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The input does not answer the current prompt.
    #[error("input does not match the current prompt")]
    UnexpectedInput,
    /// The round has already been settled.
    #[error("round is already settled")]
    RoundOver,
    /// The player's hand has no cards.
    #[error("player hand is empty")]
    EmptyHand,
    /// The operator stopped answering before the round was settled.
    #[error("round abandoned")]
    Abandoned,
}
