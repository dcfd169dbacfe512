//! FEN setup strings.
//!
//! Only the first four fields (placement, side, castling, en passant) carry
//! meaning here. Clock fields are accepted and ignored; a loaded position
//! starts with an empty move history.

use std::str::FromStr;

use super::error::FenError;
use super::{CastlingRights, Color, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut kings = [Vec::new(), Vec::new()];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                let sq = Square(rank, file);
                if piece == Piece::King {
                    kings[color.index()].push(sq);
                }
                position.set_piece(sq, color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        match (kings[0].as_slice(), kings[1].as_slice()) {
            ([white], [black]) => position.king_squares = [*white, *black],
            (white, black) => {
                return Err(FenError::KingCount {
                    white: white.len(),
                    black: black.len(),
                })
            }
        }

        position.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        position.castling_rights = rights;

        position.en_passant_target = match parts[3] {
            "-" => None,
            text => Some(text.parse().map_err(|_| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };

        position.reset_history();
        Ok(position)
    }

    /// Render the position as FEN. Clock fields are always `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling_rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_position_matches_new() {
        let position = Position::from_fen(START).unwrap();
        assert!(position.same_state(&Position::new()));
        assert_eq!(Position::new().to_fen(), START);
    }

    #[test]
    fn test_black_to_move_with_en_passant() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let position: Position = fen.parse().unwrap();
        assert!(!position.white_to_move());
        assert_eq!(position.en_passant_target(), Some(Square(2, 4)));
        assert_eq!(position.to_fen(), fen);
    }

    #[test]
    fn test_kings_located() {
        let position = Position::from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        assert_eq!(position.king_square(Color::White), Square(0, 0));
        assert_eq!(position.king_square(Color::Black), Square(0, 2));
        assert_eq!(position.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_partial_castling() {
        let position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        let rights = position.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(FenError::TooFewParts { found: 2 })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiece { char: 'x' })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::WrongRankCount { found: 7 })
        ));
        assert!(matches!(
            Position::from_fen("9/8/8/8/8/8/8/K1k5 w - - 0 1"),
            Err(FenError::TooManyFiles { .. })
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/K7 w - - 0 1"),
            Err(FenError::KingCount { white: 1, black: 0 })
        ));
    }
}
