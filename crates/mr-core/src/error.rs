//! Error types for the Maze Runner engine.

use thiserror::Error;

use crate::engine::Outcome;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while setting up or playing a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The command token is not one of w, a, s, d, p, q.
    #[error("unrecognized action '{0}'. Use w, a, s, d, p, or q.")]
    UnknownCommand(String),

    /// A command arrived after the game had already ended.
    #[error("the game is already over ({0})")]
    GameOver(Outcome),

    /// More distinct positions were requested than the board has free tiles.
    #[error("cannot place {requested} tiles: only {available} free")]
    NotEnoughTiles {
        /// How many positions were requested.
        requested: usize,
        /// How many free tiles were available.
        available: usize,
    },

    /// The game configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
