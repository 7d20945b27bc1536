//! Lichess game export records.
//!
//! Deserialized read-only from the ndjson games API; one record per line.

use serde::{Deserialize, Serialize};

use crate::enums::{ChessColor, GameOutcome, GameStatus};
use crate::error::ModelError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub user: User,
    pub rating: i32,
    #[serde(default)]
    pub rating_diff: i32,
}

impl Player {
    pub fn rating_after_game(&self) -> i32 {
        self.rating + self.rating_diff
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Players {
    pub white: Player,
    pub black: Player,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opening {
    pub eco: String,
    pub name: String,
    pub ply: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clock {
    pub initial: u32,
    pub increment: u32,
    pub total_time: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChessGame {
    pub id: String,
    pub rated: bool,
    pub variant: String,
    pub speed: String,
    pub perf: String,
    pub created_at: i64,
    pub last_move_at: i64,
    pub status: GameStatus,
    pub players: Players,
    #[serde(default)]
    pub winner: Option<ChessColor>,
    #[serde(default)]
    pub opening: Option<Opening>,
    /// Whole game as one space-delimited SAN string, in play order.
    #[serde(default)]
    pub moves: String,
    #[serde(default)]
    pub clock: Option<Clock>,
    #[serde(default)]
    pub last_fen: Option<String>,
}

impl ChessGame {
    pub fn game_url(&self) -> String {
        format!("https://lichess.org/{}", self.id)
    }

    pub fn ended_in_draw(&self) -> bool {
        matches!(self.status, GameStatus::Draw | GameStatus::Stalemate)
    }

    /// Returns `None` for draws.
    pub fn winning_player(&self) -> Option<&Player> {
        if self.ended_in_draw() {
            return None;
        }
        match self.winner {
            Some(ChessColor::White) => Some(&self.players.white),
            Some(ChessColor::Black) => Some(&self.players.black),
            None => None,
        }
    }

    /// Returns `None` for draws.
    pub fn losing_player(&self) -> Option<&Player> {
        if self.ended_in_draw() {
            return None;
        }
        match self.winner {
            Some(ChessColor::White) => Some(&self.players.black),
            Some(ChessColor::Black) => Some(&self.players.white),
            None => None,
        }
    }

    /// Look up one side's record by username (case-insensitive).
    pub fn player(&self, username: &str) -> Result<&Player, ModelError> {
        if self.players.white.user.name.eq_ignore_ascii_case(username) {
            Ok(&self.players.white)
        } else if self.players.black.user.name.eq_ignore_ascii_case(username) {
            Ok(&self.players.black)
        } else {
            Err(ModelError::InvalidUsername {
                username: username.to_string(),
                game_id: self.id.clone(),
            })
        }
    }

    /// Which color the given user played in this game.
    pub fn color_for_user(&self, username: &str) -> Result<ChessColor, ModelError> {
        // Validates the username along the way.
        self.player(username)?;
        if self.players.white.user.name.eq_ignore_ascii_case(username) {
            Ok(ChessColor::White)
        } else {
            Ok(ChessColor::Black)
        }
    }

    /// Outcome of this game for the given user.
    pub fn outcome_for_user(&self, username: &str) -> Result<GameOutcome, ModelError> {
        self.player(username)?;
        match self.winning_player() {
            Some(winner) if winner.user.name.eq_ignore_ascii_case(username) => Ok(GameOutcome::Win),
            Some(_) => Ok(GameOutcome::Loss),
            None => Ok(GameOutcome::Tie),
        }
    }
}
