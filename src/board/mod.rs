//! Chess board representation and game logic.
//!
//! An 8x8 mailbox board with reversible move application, strictly legal
//! move generation (castling, en passant and queen promotion included) and a
//! fixed-depth negamax search.
//!
//! # Example
//! ```
//! use mailbox_chess::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.valid_moves();
//! assert_eq!(moves.len(), 20);
//!
//! position.apply_move(&moves[0]);
//! position.undo_move();
//! assert!(position.same_state(&Position::new()));
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attacks::{Check, CheckInfo, Pin};
pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use eval::{CHECKMATE, STALEMATE};
pub use notation::parse_coordinate_move;
pub use state::{new_game, Cell, Position};
pub use types::{CastlingRights, Color, Direction, Move, MoveList, Piece, Square};

pub use search::{
    find_random_move, negamax, run_search, Pruning, SearchConfig, SearchOutcome, SearchStats,
    DEFAULT_DEPTH, MATE,
};
