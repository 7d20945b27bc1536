//! Worker error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("configuration error: {0}")]
    Config(&'static str),

    #[error("engine error: {0}")]
    Engine(String),

    #[error("illegal move '{mv}': {reason}")]
    IllegalMove { mv: String, reason: String },

    #[error("no scored moves for '{username}' in game {game_id}")]
    NoScoredMoves { username: String, game_id: String },

    #[error("lichess API error: {0}")]
    Lichess(String),

    #[error("discord webhook error: {0}")]
    Discord(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] chess_core::ModelError),
}
