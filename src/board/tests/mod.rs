//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests
//! - `search.rs` - Negamax and alpha-beta agreement


use super::{Move, Position, Square};

/// Find a legal move by coordinates, panicking if it is not legal.
pub(super) fn find_move(position: &mut Position, from: &str, to: &str) -> Move {
    let from: Square = from.parse().unwrap();
    let to: Square = to.parse().unwrap();
    position
        .valid_moves()
        .find(from, to)
        .unwrap_or_else(|| panic!("{from}{to} is not legal here"))
}
