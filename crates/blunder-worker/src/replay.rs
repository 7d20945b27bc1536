//! Rules-checked game replay over shakmaty.

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position};

use crate::error::WorkerError;

/// Replays one game move by move from the standard initial position.
///
/// Single writer; the side to move alternates strictly starting with
/// White. There is no mechanism to resume mid-game.
pub struct GameReplayer {
    pos: Chess,
    last_move: Option<Move>,
}

impl GameReplayer {
    pub fn new() -> Self {
        Self {
            pos: Chess::default(),
            last_move: None,
        }
    }

    /// Side to move in the current position.
    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    /// Validate and apply one move in standard algebraic notation.
    ///
    /// A token that does not parse, or does not resolve to a legal move in
    /// the current position, is a fatal input error for the run.
    pub fn apply(&mut self, san_str: &str) -> Result<(), WorkerError> {
        let san: San = san_str.parse().map_err(|e| WorkerError::IllegalMove {
            mv: san_str.to_string(),
            reason: format!("{e}"),
        })?;
        let mv = san.to_move(&self.pos).map_err(|e| WorkerError::IllegalMove {
            mv: san_str.to_string(),
            reason: format!("{e}"),
        })?;
        self.pos.play_unchecked(mv.clone());
        self.last_move = Some(mv);
        Ok(())
    }

    /// Canonical FEN snapshot of the current position.
    pub fn current_fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }

    /// Most recently applied move in coordinate notation ("e2e4").
    pub fn last_move_uci(&self) -> Option<String> {
        self.last_move
            .as_ref()
            .map(|mv| mv.to_uci(CastlingMode::Standard).to_string())
    }
}

impl Default for GameReplayer {
    fn default() -> Self {
        Self::new()
    }
}
