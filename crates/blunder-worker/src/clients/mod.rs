pub mod discord;
pub mod lichess;
