pub use chess_core;

pub mod clients;
pub mod config;
pub mod error;
pub mod eval;
pub mod replay;
pub mod report;
pub mod stockfish;
pub mod worst_move;
