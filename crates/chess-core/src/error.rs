//! Model error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid username '{username}' for game {game_id}")]
    InvalidUsername { username: String, game_id: String },

    #[error("'{value}' is not a valid {kind}")]
    UnknownEnumValue { value: String, kind: &'static str },
}
