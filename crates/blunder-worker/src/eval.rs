//! Score conversion and the evaluation oracle over Stockfish.
//!
//! All sign handling lives here: raw UCI scores are relative to the side
//! to move, get normalized to White's perspective from the FEN, and are
//! then flipped for a Black perspective so that positive always means
//! "good for the side being evaluated". Callers never reason about color.

use shakmaty::Color;

use crate::error::WorkerError;
use crate::stockfish::{EvalResult, StockfishEngine};

/// Sentinel magnitude for forced mates, offset by the mate distance so a
/// closer mate is more extreme than a farther one. Far outside any real
/// centipawn score the engine produces.
pub const MATE_SCORE: i32 = 10_000;

/// Position scoring seam between the selector and the engine.
#[allow(async_fn_in_trait)]
pub trait PositionOracle {
    /// Signed evaluation of `fen` from `perspective`'s point of view.
    async fn score(&mut self, fen: &str, perspective: Color) -> Result<i32, WorkerError>;

    /// The engine's preferred move from `fen`, in coordinate notation.
    /// `None` when the engine has nothing to suggest (terminal position).
    async fn best_move(&mut self, fen: &str) -> Result<Option<String>, WorkerError>;
}

/// Stockfish-backed oracle at a fixed search depth.
pub struct Evaluator {
    engine: StockfishEngine,
    depth: u32,
}

impl Evaluator {
    pub fn new(engine: StockfishEngine, depth: u32) -> Self {
        Self { engine, depth }
    }

    /// Shut the engine session down cleanly.
    pub async fn quit(mut self) {
        self.engine.quit().await;
    }
}

impl PositionOracle for Evaluator {
    async fn score(&mut self, fen: &str, perspective: Color) -> Result<i32, WorkerError> {
        let result = self.engine.evaluate(fen, self.depth).await?;
        let white_to_move = fen.split_whitespace().nth(1) != Some("b");
        Ok(convert_score(&result, white_to_move, perspective))
    }

    async fn best_move(&mut self, fen: &str) -> Result<Option<String>, WorkerError> {
        let result = self.engine.evaluate(fen, self.depth).await?;
        if result.best_move.is_empty() || result.best_move == "(none)" {
            Ok(None)
        } else {
            Ok(Some(result.best_move))
        }
    }
}

/// Collapse a raw engine result into one signed integer from
/// `perspective`'s point of view.
pub fn convert_score(result: &EvalResult, white_to_move: bool, perspective: Color) -> i32 {
    let white_score = if let Some(m) = result.mate {
        // Mate distance is relative to the side to move; "mate 0" means
        // the side to move is already checkmated.
        let for_mover = if m > 0 {
            MATE_SCORE - m
        } else {
            -MATE_SCORE - m
        };
        if white_to_move {
            for_mover
        } else {
            -for_mover
        }
    } else if let Some(cp) = result.cp {
        if white_to_move {
            cp
        } else {
            -cp
        }
    } else {
        0
    };

    if perspective == Color::White {
        white_score
    } else {
        -white_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(value: i32) -> EvalResult {
        EvalResult {
            cp: Some(value),
            mate: None,
            best_move: "e2e4".to_string(),
        }
    }

    fn mate(distance: i32) -> EvalResult {
        EvalResult {
            cp: None,
            mate: Some(distance),
            best_move: "e2e4".to_string(),
        }
    }

    #[test]
    fn test_centipawns_pass_through_for_white() {
        assert_eq!(convert_score(&cp(120), true, Color::White), 120);
        assert_eq!(convert_score(&cp(-45), true, Color::White), -45);
    }

    #[test]
    fn test_side_to_move_normalization() {
        // Black to move, +30 for black = -30 for white.
        assert_eq!(convert_score(&cp(30), false, Color::White), -30);
        assert_eq!(convert_score(&cp(30), false, Color::Black), 30);
    }

    #[test]
    fn test_perspectives_are_negations() {
        for result in [cp(250), cp(-80), mate(4), mate(-2)] {
            for white_to_move in [true, false] {
                let as_white = convert_score(&result, white_to_move, Color::White);
                let as_black = convert_score(&result, white_to_move, Color::Black);
                assert_eq!(as_white, -as_black);
            }
        }
    }

    #[test]
    fn test_closer_mate_is_more_extreme() {
        let mate_in_1 = convert_score(&mate(1), true, Color::White);
        let mate_in_5 = convert_score(&mate(5), true, Color::White);
        assert_eq!(mate_in_1, MATE_SCORE - 1);
        assert!(mate_in_1 > mate_in_5);

        let mated_in_1 = convert_score(&mate(-1), true, Color::White);
        let mated_in_5 = convert_score(&mate(-5), true, Color::White);
        assert_eq!(mated_in_1, -MATE_SCORE + 1);
        assert!(mated_in_1 < mated_in_5);
    }

    #[test]
    fn test_mate_zero_means_mover_is_mated() {
        // Black is checkmated: winning for white, from either perspective.
        assert_eq!(convert_score(&mate(0), false, Color::White), MATE_SCORE);
        assert_eq!(convert_score(&mate(0), false, Color::Black), -MATE_SCORE);
    }

    #[test]
    fn test_mate_far_outside_centipawn_range() {
        // A mate score never collides with a large material advantage.
        let big_cp = convert_score(&cp(2500), true, Color::White);
        let far_mate = convert_score(&mate(60), true, Color::White);
        assert!(far_mate > big_cp);
    }

    #[test]
    fn test_missing_score_defaults_to_zero() {
        let empty = EvalResult {
            cp: None,
            mate: None,
            best_move: String::new(),
        };
        assert_eq!(convert_score(&empty, true, Color::White), 0);
    }
}
