//! Worker configuration from environment variables

use std::env;

use chess_core::PerfType;

use crate::error::WorkerError;
use crate::report::HexColor;

#[derive(Clone, Debug)]
pub struct WorkerConfig {
    /// Lichess username whose games get evaluated
    pub lichess_username: String,

    /// Discord webhook URL; when unset the report is only logged
    pub discord_webhook_url: Option<String>,

    /// Path to Stockfish binary
    pub stockfish_path: String,

    /// Search depth per position (larger = slower, more accurate)
    pub eval_depth: u32,

    /// Stop scanning a game once a drop this large is found
    /// (evaluation units, more negative = larger qualifying blunder)
    pub stop_after_eval_change: i32,

    /// How many recent games to fetch
    pub max_games: u32,

    /// Which Lichess performance category to report on
    pub perf_type: PerfType,

    /// Accent color for report embeds
    pub embed_color: HexColor,
}

impl WorkerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, WorkerError> {
        let lichess_username =
            env::var("LICHESS_USERNAME").map_err(|_| WorkerError::Config("LICHESS_USERNAME not set"))?;

        let discord_webhook_url = env::var("DISCORD_WEBHOOK_URL").ok();

        let stockfish_path = env::var("STOCKFISH_PATH")
            .unwrap_or_else(|_| "/usr/local/bin/stockfish".to_string());

        let eval_depth = env::var("EVAL_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(12);

        let stop_after_eval_change = env::var("STOP_AFTER_EVAL_CHANGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(-300);

        let max_games = env::var("MAX_GAMES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let perf_type = match env::var("PERF_TYPE") {
            Ok(raw) => raw.parse()?,
            Err(_) => PerfType::Blitz,
        };

        let embed_color = match env::var("EMBED_COLOR") {
            Ok(raw) => raw.parse()?,
            Err(_) => HexColor::Teal,
        };

        Ok(Self {
            lichess_username,
            discord_webhook_url,
            stockfish_path,
            eval_depth,
            stop_after_eval_change,
            max_games,
            perf_type,
            embed_color,
        })
    }
}
