//! Report aggregation and Discord embed formatting.

use std::str::FromStr;

use chrono::Local;
use serde_json::{json, Value};

use chess_core::{ChessColor, ChessGame, GameOutcome, ModelError, TokenEnum};

use crate::worst_move::MoveEval;

/// Embed accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColor {
    Black,
    Blue,
    DarkRed,
    Gold,
    Green,
    LightBlue,
    Orange,
    Purple,
    Red,
    Teal,
    White,
    Yellow,
}

impl HexColor {
    pub fn code(self) -> u32 {
        match self {
            HexColor::Black => 0x000000,
            HexColor::Blue => 0x0000FF,
            HexColor::DarkRed => 0x8B0000,
            HexColor::Gold => 0xFFD700,
            HexColor::Green => 0x00FF00,
            HexColor::LightBlue => 0x6FBBD3,
            HexColor::Orange => 0xFFA500,
            HexColor::Purple => 0xA020F0,
            HexColor::Red => 0xFF0000,
            HexColor::Teal => 0x008080,
            HexColor::White => 0xFFFFFF,
            HexColor::Yellow => 0xFFFF00,
        }
    }
}

impl TokenEnum for HexColor {
    const KIND: &'static str = "HexColor";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("BLACK", HexColor::Black),
        ("BLUE", HexColor::Blue),
        ("DARK_RED", HexColor::DarkRed),
        ("GOLD", HexColor::Gold),
        ("GREEN", HexColor::Green),
        ("LIGHT_BLUE", HexColor::LightBlue),
        ("ORANGE", HexColor::Orange),
        ("PURPLE", HexColor::Purple),
        ("RED", HexColor::Red),
        ("TEAL", HexColor::Teal),
        ("WHITE", HexColor::White),
        ("YELLOW", HexColor::Yellow),
    ];
}

impl FromStr for HexColor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chess_core::parse_token(s)
    }
}

/// Aggregated results for one (opening, color) bucket.
#[derive(Debug, Clone)]
pub struct OpeningInfo {
    pub opening_name: String,
    pub player_color: ChessColor,
    pub net_rating: i32,
    pub outcomes: Vec<GameOutcome>,
}

/// Bucket games by opening name and played color, preserving the order
/// the openings were first seen in.
pub fn opening_infos(games: &[ChessGame], username: &str) -> Result<Vec<OpeningInfo>, ModelError> {
    let mut infos: Vec<OpeningInfo> = Vec::new();

    for game in games {
        let outcome = game.outcome_for_user(username)?;
        let rating_diff = game.player(username)?.rating_diff;
        let color = game.color_for_user(username)?;
        let name = game
            .opening
            .as_ref()
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "Unknown opening".to_string());

        match infos
            .iter_mut()
            .find(|info| info.opening_name == name && info.player_color == color)
        {
            Some(info) => {
                info.net_rating += rating_diff;
                info.outcomes.push(outcome);
            }
            None => infos.push(OpeningInfo {
                opening_name: name,
                player_color: color,
                net_rating: rating_diff,
                outcomes: vec![outcome],
            }),
        }
    }

    Ok(infos)
}

/// "W-L-T" record across a set of outcomes.
pub fn record_string(outcomes: &[GameOutcome]) -> String {
    let mut wins = 0;
    let mut losses = 0;
    let mut ties = 0;
    for outcome in outcomes {
        match outcome {
            GameOutcome::Win => wins += 1,
            GameOutcome::Loss => losses += 1,
            GameOutcome::Tie => ties += 1,
        }
    }
    format!("{wins}-{losses}-{ties}")
}

/// Signed rating change, with an explicit + for gains.
pub fn rating_string(net: i32) -> String {
    if net > 0 {
        format!("+{net}")
    } else {
        net.to_string()
    }
}

pub fn rating_emoji(net: i32) -> &'static str {
    if net == 0 {
        ":heavy_minus_sign:"
    } else if net > 0 {
        ":chart_with_upwards_trend:"
    } else {
        ":chart_with_downwards_trend:"
    }
}

pub fn color_emoji(color: ChessColor) -> &'static str {
    match color {
        ChessColor::White => ":white_large_square:",
        ChessColor::Black => ":black_large_square:",
    }
}

/// Human-readable date line for the report header ("Friday, August 29").
pub fn report_date() -> String {
    Local::now().format("%A, %B %-d").to_string()
}

/// Summary embed with one line per opening bucket.
pub fn opening_summary_embed(username: &str, infos: &[OpeningInfo], color: HexColor) -> Value {
    let lines: Vec<String> = infos
        .iter()
        .map(|info| {
            format!(
                "{} {} **{}**: {} ({})",
                color_emoji(info.player_color),
                rating_emoji(info.net_rating),
                info.opening_name,
                record_string(&info.outcomes),
                rating_string(info.net_rating),
            )
        })
        .collect();

    json!({
        "title": format!("Openings for {username} - {}", report_date()),
        "description": lines.join("\n"),
        "color": color.code(),
    })
}

/// Embed describing the single worst move found across the batch.
pub fn worst_move_embed(
    username: &str,
    game: &ChessGame,
    worst: &MoveEval,
    color: HexColor,
) -> Value {
    let suggestion = worst
        .engine_best_move
        .as_deref()
        .map(|mv| format!("`{mv}`"))
        .unwrap_or_else(|| "none".to_string());

    let description = format!(
        "Played `{}` ({} eval change). Engine preferred: {}.\n[Explore the position]({})",
        worst.actual_move,
        worst.eval_change,
        suggestion,
        worst.analysis_url(),
    );

    json!({
        "title": format!("Worst move of the week for {username}"),
        "url": game.game_url(),
        "description": description,
        "color": color.code(),
    })
}
