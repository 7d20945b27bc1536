pub mod enums;
pub mod error;
pub mod game;

pub use enums::{parse_token, ChessColor, GameOutcome, GameStatus, PerfType, SortOrder, TokenEnum};
pub use error::ModelError;
pub use game::{ChessGame, Clock, Opening, Player, Players, User};
