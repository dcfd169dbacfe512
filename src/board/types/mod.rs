//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::{Direction, Square};
