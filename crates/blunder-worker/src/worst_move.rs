//! Worst-move selection: replay a finished game and find the single move
//! by the tracked player with the largest evaluation drop.

use serde::Serialize;
use shakmaty::Color;
use tracing::debug;

use chess_core::ChessGame;

use crate::error::WorkerError;
use crate::eval::PositionOracle;
use crate::replay::GameReplayer;

/// One scored ply for the tracked player.
#[derive(Debug, Clone, Serialize)]
pub struct MoveEval {
    /// The move as played, in coordinate notation.
    #[serde(rename = "move")]
    pub actual_move: String,
    /// Evaluation swing attributable to this move, from the tracked
    /// player's perspective (negative = worse).
    pub eval_change: i32,
    /// Position immediately before the move was played.
    pub fen_before_move: String,
    /// Engine's preferred alternative from that position; populated only
    /// while this ply was the worst seen so far.
    pub engine_best_move: Option<String>,
}

impl MoveEval {
    /// Lichess analysis link for the position the move was played from.
    pub fn analysis_url(&self) -> String {
        format!(
            "https://lichess.org/analysis/fromPosition/{}",
            self.fen_before_move.replace(' ', "_")
        )
    }
}

/// Scan one game and return the tracked player's worst move.
///
/// Strictly sequential: every scored ply blocks on the oracle before the
/// next move is applied, because the running evaluation and worst-change
/// accumulators carry between plies. The scan stops early once the worst
/// change seen is at or beyond `stop_after_eval_change` (more negative =
/// worse), which bounds engine calls on long, already-decided games.
///
/// Fails atomically: an illegal move discards all prior records, and zero
/// scored plies for the tracked player is an error.
pub async fn find_worst_move<O: PositionOracle>(
    oracle: &mut O,
    game: &ChessGame,
    username: &str,
    stop_after_eval_change: i32,
) -> Result<MoveEval, WorkerError> {
    let tracked: Color = game.color_for_user(username)?.into();

    let mut replayer = GameReplayer::new();
    let mut move_evals: Vec<MoveEval> = Vec::new();
    let mut worst_change = 0;
    let mut last_eval = 0;

    for san in game.moves.split_whitespace() {
        // The worst drop found so far already qualifies.
        if worst_change <= stop_after_eval_change {
            break;
        }

        let mover = replayer.turn();
        let fen_before = replayer.current_fen();
        replayer.apply(san)?;

        if mover != tracked {
            continue;
        }

        let current_eval = oracle.score(&replayer.current_fen(), tracked).await?;
        let eval_change = current_eval - last_eval;
        debug!(game_id = %game.id, mv = %san, eval_change, "scored ply");

        let mut move_eval = MoveEval {
            actual_move: replayer.last_move_uci().unwrap_or_default(),
            eval_change,
            fen_before_move: fen_before,
            engine_best_move: None,
        };

        if eval_change < worst_change {
            worst_change = eval_change;
            move_eval.engine_best_move = oracle.best_move(&move_eval.fen_before_move).await?;
        }

        last_eval = current_eval;
        move_evals.push(move_eval);
    }

    // Stable minimum: the first occurrence wins ties.
    move_evals
        .into_iter()
        .reduce(|worst, current| {
            if current.eval_change < worst.eval_change {
                current
            } else {
                worst
            }
        })
        .ok_or_else(|| WorkerError::NoScoredMoves {
            username: username.to_string(),
            game_id: game.id.clone(),
        })
}
