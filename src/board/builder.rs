//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Color, Piece, PositionBuilder, Square};
//!
//! let mut position = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.valid_moves().len(), 7);
//! ```

use super::{CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board with no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        PositionBuilder {
            pieces: start.pieces().collect(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the position.
    ///
    /// Both kings must have been placed; the king squares are taken from the
    /// last king of each color found on the board.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();

        for (square, color, piece) in self.pieces {
            position.set_piece(square, color, piece);
            if piece == Piece::King {
                position.king_squares[color.index()] = square;
            }
        }
        debug_assert!(
            Color::BOTH.iter().all(|&color| {
                position.piece_at(position.king_square(color)) == Some((color, Piece::King))
            }),
            "each side needs a king"
        );

        position.white_to_move = self.side_to_move == Color::White;
        position.castling_rights = self.castling_rights;
        position.en_passant_target = self.en_passant_target;
        position.reset_history();
        position
    }
}
