//! Move type and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// One state transition of a position.
///
/// A move is immutable once generated. It records the piece that moved and the
/// piece it captured, so it can be undone without consulting anything else.
///
/// Equality and hashing use only the identity returned by [`Move::id`], which
/// packs the four coordinates. That is collision-free because promotion is
/// always to a queen and an en passant capture can never share its two squares
/// with an ordinary capture in the same position.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) moved: (Color, Piece),
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) is_en_passant: bool,
    pub(crate) is_promotion: bool,
    pub(crate) is_castling: bool,
}

impl Move {
    #[inline]
    pub(crate) const fn new(
        from: Square,
        to: Square,
        moved: (Color, Piece),
        captured: Option<(Color, Piece)>,
    ) -> Self {
        Move {
            from,
            to,
            moved,
            captured,
            is_en_passant: false,
            is_promotion: false,
            is_castling: false,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Color of the side making this move
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.moved.0
    }

    /// Kind of the piece that moved (a pawn for promotions)
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.moved.1
    }

    /// Piece removed from the board by this move, if any
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<(Color, Piece)> {
        self.captured
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    /// Returns true if this move promotes a pawn (always to a queen)
    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.is_castling
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(&self) -> bool {
        self.is_castling && self.to.1 > self.from.1
    }

    /// Returns true if this is a two-square pawn advance
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.moved.1 == Piece::Pawn && self.from.0.abs_diff(self.to.0) == 2
    }

    /// Square of the pawn removed by an en passant capture.
    ///
    /// It sits beside the capturing pawn's origin, on the destination file.
    #[inline]
    #[must_use]
    pub const fn en_passant_victim(&self) -> Square {
        Square(self.from.0, self.to.1)
    }

    /// Identity derived from the four coordinates.
    ///
    /// Encoding: bits 0-5 from square, bits 6-11 to square.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u16 {
        (self.from.as_index() as u16) | ((self.to.as_index() as u16) << 6)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({}{} {}",
            self.from,
            self.to,
            self.moved.1.to_fen_char(self.moved.0)
        )?;
        if self.is_promotion {
            write!(f, "=Q")?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling {
            write!(f, " castle")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.is_promotion {
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// Ordered list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(48),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn retain<F: FnMut(&Move) -> bool>(&mut self, f: F) {
        self.moves.retain(f);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Returns true if a move with the same identity is in the list
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Look a move up by its coordinates
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.moves
            .iter()
            .find(|m| m.from == from && m.to == to)
            .copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_uses_coordinates_only() {
        let quiet = Move::new(
            Square(1, 4),
            Square(3, 4),
            (Color::White, Piece::Pawn),
            None,
        );
        let mut flagged = quiet;
        flagged.is_promotion = true;
        assert_eq!(quiet, flagged);
        assert_eq!(quiet.id(), 12 | (28 << 6));

        let other = Move::new(
            Square(1, 4),
            Square(2, 4),
            (Color::White, Piece::Pawn),
            None,
        );
        assert_ne!(quiet, other);
    }

    #[test]
    fn test_identity_is_unique_per_coordinate_pair() {
        let mut seen = std::collections::HashSet::new();
        for from in Square::all() {
            for to in Square::all() {
                let mv = Move::new(from, to, (Color::White, Piece::Queen), None);
                assert!(seen.insert(mv.id()));
            }
        }
    }

    #[test]
    fn test_display_coordinate_form() {
        let mut mv = Move::new(
            Square(6, 0),
            Square(7, 0),
            (Color::White, Piece::Pawn),
            None,
        );
        assert_eq!(mv.to_string(), "a7a8");
        mv.is_promotion = true;
        assert_eq!(mv.to_string(), "a7a8q");
    }

    #[test]
    fn test_move_list_lookup() {
        let mv = Move::new(
            Square(0, 6),
            Square(2, 5),
            (Color::White, Piece::Knight),
            None,
        );
        let list: MoveList = std::iter::once(mv).collect();
        assert_eq!(list.len(), 1);
        assert!(list.contains(&mv));
        assert_eq!(list.find(Square(0, 6), Square(2, 5)), Some(mv));
        assert_eq!(list.find(Square(0, 6), Square(2, 7)), None);
    }
}
