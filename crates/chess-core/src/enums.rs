//! Chess domain enums and the shared token-table parser.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Enums parseable from loosely-formatted config tokens.
///
/// Matching uppercases both sides and ignores `_` and `-`, so
/// "ULTRA_BULLET", "ultraBullet" and "ultra-bullet" all resolve to the
/// same variant.
pub trait TokenEnum: Sized + Copy + 'static {
    /// Human-readable type name used in error messages.
    const KIND: &'static str;
    /// Lookup table of canonical names to variants.
    const VARIANTS: &'static [(&'static str, Self)];
}

fn fold_token(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Parse a config token into an enum via its variant table.
pub fn parse_token<E: TokenEnum>(s: &str) -> Result<E, ModelError> {
    let needle = fold_token(s);
    E::VARIANTS
        .iter()
        .find(|(name, _)| fold_token(name) == needle)
        .map(|(_, variant)| *variant)
        .ok_or_else(|| ModelError::UnknownEnumValue {
            value: s.to_string(),
            kind: E::KIND,
        })
}

/// Side of the board a player controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChessColor {
    White,
    Black,
}

impl ChessColor {
    pub fn other(self) -> Self {
        match self {
            ChessColor::White => ChessColor::Black,
            ChessColor::Black => ChessColor::White,
        }
    }
}

impl From<ChessColor> for shakmaty::Color {
    fn from(color: ChessColor) -> Self {
        match color {
            ChessColor::White => shakmaty::Color::White,
            ChessColor::Black => shakmaty::Color::Black,
        }
    }
}

impl TokenEnum for ChessColor {
    const KIND: &'static str = "ChessColor";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("WHITE", ChessColor::White),
        ("BLACK", ChessColor::Black),
    ];
}

/// How a Lichess game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Mate,
    Resign,
    Draw,
    Stalemate,
    Timeout,
    #[serde(rename = "outoftime")]
    OutOfTime,
    /// Statuses the report does not distinguish (cheat, variantEnd, ...).
    #[serde(other)]
    Unknown,
}

/// Result of a game from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameOutcome {
    Win,
    Loss,
    Tie,
}

/// Lichess performance categories, as accepted by the games API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerfType {
    UltraBullet,
    Bullet,
    Blitz,
    Rapid,
    Classical,
    Correspondence,
    Chess960,
    Crazyhouse,
    Antichess,
    Atomic,
    KingOfTheHill,
    RacingKings,
    ThreeCheck,
}

impl PerfType {
    /// Wire value for the `perfType` query parameter.
    pub fn api_token(self) -> &'static str {
        match self {
            PerfType::UltraBullet => "ultraBullet",
            PerfType::Bullet => "bullet",
            PerfType::Blitz => "blitz",
            PerfType::Rapid => "rapid",
            PerfType::Classical => "classical",
            PerfType::Correspondence => "correspondence",
            PerfType::Chess960 => "chess960",
            PerfType::Crazyhouse => "crazyhouse",
            PerfType::Antichess => "antichess",
            PerfType::Atomic => "atomic",
            PerfType::KingOfTheHill => "kingOfTheHill",
            PerfType::RacingKings => "racingKings",
            PerfType::ThreeCheck => "threeCheck",
        }
    }
}

impl TokenEnum for PerfType {
    const KIND: &'static str = "PerfType";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("ULTRA_BULLET", PerfType::UltraBullet),
        ("BULLET", PerfType::Bullet),
        ("BLITZ", PerfType::Blitz),
        ("RAPID", PerfType::Rapid),
        ("CLASSICAL", PerfType::Classical),
        ("CORRESPONDENCE", PerfType::Correspondence),
        ("CHESS_960", PerfType::Chess960),
        ("CRAZYHOUSE", PerfType::Crazyhouse),
        ("ANTICHESS", PerfType::Antichess),
        ("ATOMIC", PerfType::Atomic),
        ("KING_OF_THE_HILL", PerfType::KingOfTheHill),
        ("RACING_KINGS", PerfType::RacingKings),
        ("THREE_CHECK", PerfType::ThreeCheck),
    ];
}

impl FromStr for PerfType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(s)
    }
}

/// Sort order for fetched games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    DateAsc,
    DateDesc,
}

impl SortOrder {
    /// Wire value for the `sort` query parameter.
    pub fn api_token(self) -> &'static str {
        match self {
            SortOrder::DateAsc => "dateAsc",
            SortOrder::DateDesc => "dateDesc",
        }
    }
}

impl TokenEnum for SortOrder {
    const KIND: &'static str = "SortOrder";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("DATE_ASC", SortOrder::DateAsc),
        ("DATE_DESC", SortOrder::DateDesc),
    ];
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(s)
    }
}
