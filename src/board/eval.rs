//! Static evaluation: terminal flags first, then material.

use super::Position;

/// Score of a checkmate, from White's point of view when Black is mated.
pub const CHECKMATE: i32 = 1000;

pub const STALEMATE: i32 = 0;

impl Position {
    /// Material balance in pawns, White positive.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.pieces()
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum()
    }

    /// White-relative score of the position.
    ///
    /// Uses the checkmate and stalemate flags cached by the last legal-move
    /// query rather than deriving them again.
    #[must_use]
    pub fn static_score(&self) -> i32 {
        if self.checkmate {
            // The side to move is the one that got mated.
            -self.side_to_move().sign() * CHECKMATE
        } else if self.stalemate {
            STALEMATE
        } else {
            self.material_balance()
        }
    }

    /// Sign of the side to move: +1 for White, -1 for Black.
    #[inline]
    #[must_use]
    pub fn turn_sign(&self) -> i32 {
        self.side_to_move().sign()
    }
}
