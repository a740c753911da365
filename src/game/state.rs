//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game is in progress.
    Idle,
    /// Both decks are live and the next round can be played.
    InProgress,
    /// One deck is empty; the game is over and no further rounds are
    /// accepted until a new game is started.
    Resolved,
}
