//! Weekly worst-move report worker
//!
//! Fetches a user's recent Lichess games, replays each one against a local
//! Stockfish session, finds the single worst move across the batch and
//! posts a Discord report.

use tracing::{error, info, warn};

use blunder_worker::chess_core::{ChessGame, SortOrder};
use blunder_worker::clients::discord::DiscordClient;
use blunder_worker::clients::lichess::{GamesQuery, LichessClient};
use blunder_worker::config::WorkerConfig;
use blunder_worker::error::WorkerError;
use blunder_worker::eval::Evaluator;
use blunder_worker::report;
use blunder_worker::stockfish::StockfishEngine;
use blunder_worker::worst_move::{find_worst_move, MoveEval};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let config = WorkerConfig::load()?;
    info!(
        username = %config.lichess_username,
        stockfish_path = %config.stockfish_path,
        depth = config.eval_depth,
        stop_after = config.stop_after_eval_change,
        "Worker config loaded"
    );

    let lichess = LichessClient::new()?;
    let games = lichess
        .fetch_user_games(
            &config.lichess_username,
            GamesQuery {
                max: config.max_games,
                rated: true,
                perf_type: config.perf_type,
                sort: SortOrder::DateDesc,
            },
        )
        .await?;
    info!(count = games.len(), "Fetched games");

    if games.is_empty() {
        info!("Nothing to report");
        return Ok(());
    }

    let engine = StockfishEngine::new(&config.stockfish_path).await?;
    let mut evaluator = Evaluator::new(engine, config.eval_depth);

    // One engine session; games are evaluated back-to-back, never
    // concurrently, because each query mutates the session state.
    let mut worst_overall: Option<(&ChessGame, MoveEval)> = None;
    for game in &games {
        match find_worst_move(
            &mut evaluator,
            game,
            &config.lichess_username,
            config.stop_after_eval_change,
        )
        .await
        {
            Ok(worst) => {
                info!(
                    game_id = %game.id,
                    mv = %worst.actual_move,
                    eval_change = worst.eval_change,
                    "Evaluated game"
                );
                let is_new_worst = worst_overall
                    .as_ref()
                    .map(|(_, w)| worst.eval_change < w.eval_change)
                    .unwrap_or(true);
                if is_new_worst {
                    worst_overall = Some((game, worst));
                }
            }
            Err(e @ WorkerError::Engine(_)) => {
                // A dead engine session cannot resume a partial scan.
                error!(game_id = %game.id, error = %e, "Engine failed mid-batch");
                return Err(e.into());
            }
            Err(e) => {
                warn!(game_id = %game.id, error = %e, "Skipping game");
            }
        }
    }
    evaluator.quit().await;

    let infos = report::opening_infos(&games, &config.lichess_username)?;
    let mut embeds = vec![report::opening_summary_embed(
        &config.lichess_username,
        &infos,
        config.embed_color,
    )];
    if let Some((game, worst)) = &worst_overall {
        embeds.push(report::worst_move_embed(
            &config.lichess_username,
            game,
            worst,
            config.embed_color,
        ));
    }

    match &config.discord_webhook_url {
        Some(url) => {
            DiscordClient::new()?.send_webhook(url, &embeds).await?;
            info!("Report delivered");
        }
        None => {
            info!(
                report = %serde_json::to_string_pretty(&embeds)?,
                "Dry run, no webhook configured"
            );
        }
    }

    Ok(())
}
