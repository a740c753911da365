//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A game is already in progress.
    #[error("a game is already in progress")]
    InvalidState,
}

/// Errors that can occur when playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No game is in progress.
    #[error("no game is in progress")]
    InvalidState,
    /// A draw found an empty deck despite the engine's size checks.
    ///
    /// Unreachable when the engine is behaving correctly; observing it
    /// indicates an internal defect, not a usage error.
    #[error("draw from an empty deck")]
    EmptyDeck,
}
