//! Selector behavior against a scripted oracle.

mod common;

use blunder_worker::error::WorkerError;
use blunder_worker::worst_move::find_worst_move;
use chess_core::ModelError;
use common::{game_with_moves, FakeOracle};
use shakmaty::Color;

const NO_STOP: i32 = -100_000;

#[tokio::test]
async fn returns_single_worst_move_with_suggestion() {
    let game = game_with_moves("d4 d5 c4 e6 Nc3 Nf6");
    // White plies score 50, -200, -150: deltas 50, -250, +50.
    let mut oracle = FakeOracle::new(&[50, -200, -150]);

    let worst = find_worst_move(&mut oracle, &game, "alice", NO_STOP)
        .await
        .unwrap();

    assert_eq!(worst.actual_move, "c2c4");
    assert_eq!(worst.eval_change, -250);
    assert_eq!(worst.engine_best_move.as_deref(), Some("g1f3"));
    // The suggestion comes from the position the blunder was played in.
    assert_eq!(
        worst.fen_before_move,
        "rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR w KQkq - 0 2"
    );
    // Only the tracked player's plies hit the engine.
    assert_eq!(oracle.score_calls, 3);
    assert_eq!(oracle.last_perspective, Some(Color::White));
}

#[tokio::test]
async fn tracked_black_player_is_scored_from_blacks_perspective() {
    let game = game_with_moves("e4 d5 exd5 Qxd5");
    // Black plies d5, Qxd5 score -30 then 40: deltas -30, +70.
    let mut oracle = FakeOracle::new(&[-30, 40]);

    let worst = find_worst_move(&mut oracle, &game, "bob", NO_STOP)
        .await
        .unwrap();

    assert_eq!(worst.actual_move, "d7d5");
    assert_eq!(worst.eval_change, -30);
    assert_eq!(oracle.score_calls, 2);
    assert_eq!(oracle.last_perspective, Some(Color::Black));
}

#[tokio::test]
async fn equal_deltas_keep_the_earliest_ply() {
    let game = game_with_moves("d4 d5 c4 e6 Nc3 Nf6");
    // Deltas are -100 for every white ply.
    let mut oracle = FakeOracle::new(&[-100, -200, -300]);

    let worst = find_worst_move(&mut oracle, &game, "alice", NO_STOP)
        .await
        .unwrap();

    assert_eq!(worst.actual_move, "d2d4");
    assert_eq!(worst.eval_change, -100);
    // The first drop was the worst seen at its ply, so it carries the
    // engine suggestion; the later equal drops never re-queried.
    assert!(worst.engine_best_move.is_some());
    assert_eq!(oracle.best_move_calls, 1);
}

#[tokio::test]
async fn early_exit_bounds_engine_calls() {
    let game = game_with_moves("d4 d5 c4 e6 Nc3 Nf6");
    let mut oracle = FakeOracle::new(&[-400, 0, 0]);

    let worst = find_worst_move(&mut oracle, &game, "alice", -300)
        .await
        .unwrap();

    assert_eq!(worst.eval_change, -400);
    // The scan stopped after the qualifying drop.
    assert_eq!(oracle.score_calls, 1);
}

#[tokio::test]
async fn tightening_the_threshold_never_scans_later() {
    let game = game_with_moves("d4 d5 c4 e6 Nc3 Nf6");
    // Deltas -150, -250, +50.
    let script = [-150, -400, -350];

    let mut calls = Vec::new();
    for threshold in [-1000, -200, -100] {
        let mut oracle = FakeOracle::new(&script);
        find_worst_move(&mut oracle, &game, "alice", threshold)
            .await
            .unwrap();
        calls.push(oracle.score_calls);
    }

    assert_eq!(calls, vec![3, 2, 1]);
}

#[tokio::test]
async fn deterministic_oracle_gives_identical_results() {
    let game = game_with_moves("d4 d5 c4 e6 Nc3 Nf6");
    let script = [50, -200, -150];

    let mut first_oracle = FakeOracle::new(&script);
    let first = find_worst_move(&mut first_oracle, &game, "alice", NO_STOP)
        .await
        .unwrap();
    let mut second_oracle = FakeOracle::new(&script);
    let second = find_worst_move(&mut second_oracle, &game, "alice", NO_STOP)
        .await
        .unwrap();

    assert_eq!(first.actual_move, second.actual_move);
    assert_eq!(first.eval_change, second.eval_change);
    assert_eq!(first.fen_before_move, second.fen_before_move);
    assert_eq!(first.engine_best_move, second.engine_best_move);
}

#[tokio::test]
async fn mating_move_is_never_the_worst_for_the_mating_side() {
    let game = game_with_moves("e4 e5 Qh5 Nc6 Qxf7#");
    // Qxf7# ends the game with a huge positive swing for White; the only
    // negative swing is the premature queen sortie.
    let mut oracle = FakeOracle::new(&[30, 20, 9997]);

    let worst = find_worst_move(&mut oracle, &game, "alice", NO_STOP)
        .await
        .unwrap();

    assert_eq!(worst.actual_move, "d1h5");
    assert_eq!(worst.eval_change, -10);
}

#[tokio::test]
async fn tracked_player_without_moves_is_an_error() {
    // Black never got to move.
    let game = game_with_moves("e4");
    let mut oracle = FakeOracle::new(&[]);

    let err = find_worst_move(&mut oracle, &game, "bob", NO_STOP)
        .await
        .unwrap_err();

    assert!(matches!(err, WorkerError::NoScoredMoves { .. }));
    assert_eq!(oracle.score_calls, 0);
}

#[tokio::test]
async fn empty_move_list_is_an_error() {
    let game = game_with_moves("");
    let mut oracle = FakeOracle::new(&[]);

    let err = find_worst_move(&mut oracle, &game, "alice", NO_STOP)
        .await
        .unwrap_err();

    assert!(matches!(err, WorkerError::NoScoredMoves { .. }));
}

#[tokio::test]
async fn unknown_username_is_rejected_before_any_engine_work() {
    let game = game_with_moves("e4 e5");
    let mut oracle = FakeOracle::new(&[]);

    let err = find_worst_move(&mut oracle, &game, "mallory", NO_STOP)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WorkerError::Model(ModelError::InvalidUsername { .. })
    ));
    assert_eq!(oracle.score_calls, 0);
}

#[tokio::test]
async fn corrupt_move_list_fails_without_partial_result() {
    let game = game_with_moves("e4 e5 Zz9 d4");
    let mut oracle = FakeOracle::new(&[10]);

    let err = find_worst_move(&mut oracle, &game, "alice", NO_STOP)
        .await
        .unwrap_err();

    match err {
        WorkerError::IllegalMove { mv, .. } => assert_eq!(mv, "Zz9"),
        other => panic!("unexpected error: {other}"),
    }
    // The legal prefix had already been scored when the scan aborted.
    assert_eq!(oracle.score_calls, 1);
}
