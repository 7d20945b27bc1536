use blunder_worker::error::WorkerError;
use blunder_worker::eval::PositionOracle;
use chess_core::ChessGame;
use shakmaty::Color;

/// Oracle returning a scripted sequence of scores, one per scored ply,
/// while counting how often it was queried.
pub struct FakeOracle {
    scores: Vec<i32>,
    next: usize,
    pub score_calls: u32,
    pub best_move_calls: u32,
    pub last_perspective: Option<Color>,
}

impl FakeOracle {
    pub fn new(scores: &[i32]) -> Self {
        Self {
            scores: scores.to_vec(),
            next: 0,
            score_calls: 0,
            best_move_calls: 0,
            last_perspective: None,
        }
    }
}

impl PositionOracle for FakeOracle {
    async fn score(&mut self, _fen: &str, perspective: Color) -> Result<i32, WorkerError> {
        self.score_calls += 1;
        self.last_perspective = Some(perspective);
        let value = self.scores[self.next];
        self.next += 1;
        Ok(value)
    }

    async fn best_move(&mut self, _fen: &str) -> Result<Option<String>, WorkerError> {
        self.best_move_calls += 1;
        Ok(Some("g1f3".to_string()))
    }
}

/// A finished game between alice (White) and bob (Black) with the given
/// move list.
pub fn game_with_moves(moves: &str) -> ChessGame {
    let line = format!(
        r#"{{"id":"testgame","rated":true,"variant":"standard","speed":"blitz","perf":"blitz",
           "createdAt":1,"lastMoveAt":2,"status":"resign","winner":"white",
           "players":{{"white":{{"user":{{"name":"alice","id":"alice"}},"rating":1500,"ratingDiff":8}},
                       "black":{{"user":{{"name":"bob","id":"bob"}},"rating":1490,"ratingDiff":-8}}}},
           "opening":{{"eco":"A40","name":"Test Opening","ply":2}},"moves":"{moves}"}}"#,
    );
    serde_json::from_str(&line).unwrap()
}
