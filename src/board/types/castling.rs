//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask.
///
/// This is a `Copy` value: the position's history stack stores independent
/// snapshots, so editing the current rights never touches an older entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_both(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rights_are_independent() {
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, true);
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        assert!(rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));

        rights.remove_both(Color::Black);
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut current = CastlingRights::all();
        let snapshot = current;
        current.remove_both(Color::White);
        assert_eq!(snapshot, CastlingRights::all());
        assert_ne!(snapshot, current);
    }

    #[test]
    fn test_set_from_none() {
        let mut rights = CastlingRights::none();
        rights.set(Color::Black, false);
        assert!(rights.has(Color::Black, false));
        assert!(!rights.has(Color::Black, true));
    }
}
