//! Lichess games API client (ndjson export).

use reqwest::Client;

use chess_core::{ChessGame, PerfType, SortOrder};

use crate::error::WorkerError;

/// Query options for the games export endpoint.
#[derive(Debug, Clone, Copy)]
pub struct GamesQuery {
    pub max: u32,
    pub rated: bool,
    pub perf_type: PerfType,
    pub sort: SortOrder,
}

pub struct LichessClient {
    client: Client,
}

impl LichessClient {
    pub fn new() -> Result<Self, WorkerError> {
        let client = Client::builder()
            .user_agent("blunder-worker/0.1")
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| WorkerError::Lichess(format!("Client build error: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch finished games for a user, newest first unless sorted
    /// otherwise. Opening metadata is always requested.
    pub async fn fetch_user_games(
        &self,
        username: &str,
        query: GamesQuery,
    ) -> Result<Vec<ChessGame>, WorkerError> {
        let url = format!("https://lichess.org/api/games/user/{username}");

        let params = [
            ("max", query.max.to_string()),
            ("rated", query.rated.to_string()),
            ("perfType", query.perf_type.api_token().to_string()),
            ("sort", query.sort.api_token().to_string()),
            ("opening", "true".to_string()),
            ("finished", "true".to_string()),
        ];

        // Rate limit
        tokio::time::sleep(std::time::Duration::from_secs(1)).await;

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .header("Accept", "application/x-ndjson")
            .send()
            .await
            .map_err(|e| WorkerError::Lichess(format!("Request error: {e}")))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(WorkerError::Lichess(format!("User '{username}' not found")));
        }

        if !resp.status().is_success() {
            return Err(WorkerError::Lichess(format!("HTTP {}", resp.status())));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| WorkerError::Lichess(format!("Body read error: {e}")))?;

        Ok(parse_ndjson(&text))
    }
}

/// Parse the ndjson body, one game per line. Unparseable lines are logged
/// and skipped rather than failing the whole fetch.
fn parse_ndjson(text: &str) -> Vec<ChessGame> {
    let mut games = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<ChessGame>(line) {
            Ok(game) => games.push(game),
            Err(e) => {
                tracing::warn!("Failed to parse Lichess game JSON: {e}");
            }
        }
    }
    games
}
