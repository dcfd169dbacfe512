//! Human-readable move notation and coordinate-move parsing.
//!
//! Rendering follows a short algebraic form without check markers or
//! disambiguation: "O-O", "exd6 e.p.", "e8Q", "Nxf7", "Bb5", "e4".

use super::error::MoveParseError;
use super::{Move, Piece, Position, Square};

impl Move {
    /// Short algebraic rendering of this move.
    #[must_use]
    pub fn notation(&self) -> String {
        let dest = self.to.to_string();
        if self.is_castling {
            return if self.is_castle_kingside() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }
        if self.is_en_passant {
            return format!("{}x{} e.p.", self.from.file_char(), dest);
        }
        if self.is_promotion {
            return format!("{dest}{}", Piece::Queen.to_char().to_ascii_uppercase());
        }

        let piece = self.piece();
        let prefix = if piece == Piece::Pawn {
            String::new()
        } else {
            piece.to_char().to_ascii_uppercase().to_string()
        };
        if self.is_capture() {
            if piece == Piece::Pawn {
                format!("{}x{dest}", self.from.file_char())
            } else {
                format!("{prefix}x{dest}")
            }
        } else {
            format!("{prefix}{dest}")
        }
    }
}

/// Split coordinate text (`e2e4`, `e7e8q`) into its two squares.
///
/// A trailing promotion letter is accepted only as `q`, since every promotion
/// is to a queen.
pub fn parse_coordinate_move(text: &str) -> Result<(Square, Square), MoveParseError> {
    if !text.is_ascii() {
        return Err(MoveParseError::InvalidSquare {
            notation: text.to_string(),
        });
    }
    let len = text.len();
    if !(4..=5).contains(&len) {
        return Err(MoveParseError::InvalidLength { len });
    }
    let from: Square = text[0..2].parse()?;
    let to: Square = text[2..4].parse()?;
    if let Some(c) = text[4..].chars().next() {
        if c.to_ascii_lowercase() != 'q' {
            return Err(MoveParseError::InvalidPromotion { char: c });
        }
    }
    Ok((from, to))
}

impl Position {
    /// Look up coordinate text in the current legal move list.
    ///
    /// The lookup is by move identity, so a promotion may be written with or
    /// without its `q`.
    pub fn find_legal_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let (from, to) = parse_coordinate_move(text)?;
        self.valid_moves()
            .find(from, to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Notation of every applied move, oldest first.
    #[must_use]
    pub fn notation_log(&self) -> Vec<String> {
        self.move_log.iter().map(Move::notation).collect()
    }
}
