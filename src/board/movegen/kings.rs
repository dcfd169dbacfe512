use super::super::attacks::KING_TARGETS;
use super::super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// King steps, each checked by relocating the king and asking the attack
    /// detector whether it would stand in check.
    pub(crate) fn king_moves(&mut self, from: Square, moves: &mut MoveList) {
        let us = self.side_to_move();
        for &(to, _) in &KING_TARGETS[from.as_index()] {
            if self.color_on(to) == Some(us) {
                continue;
            }
            if self.king_safe_on(to) {
                moves.push(self.create_move(from, to, Piece::King));
            }
        }
    }

    /// Castling for the side to move. Callers only ask when not in check.
    pub(crate) fn castle_moves(&mut self, from: Square, moves: &mut MoveList) {
        let us = self.side_to_move();
        let rank = us.back_rank();
        if from != Square(rank, 4) {
            return;
        }
        let rook = Some((us, Piece::Rook));

        if self.castling_rights.has(us, true)
            && self.piece_at(Square(rank, 7)) == rook
            && self.is_empty(Square(rank, 5))
            && self.is_empty(Square(rank, 6))
            && self.king_safe_on(Square(rank, 5))
            && self.king_safe_on(Square(rank, 6))
        {
            moves.push(castle(us, from, Square(rank, 6)));
        }

        if self.castling_rights.has(us, false)
            && self.piece_at(Square(rank, 0)) == rook
            && self.is_empty(Square(rank, 1))
            && self.is_empty(Square(rank, 2))
            && self.is_empty(Square(rank, 3))
            && self.king_safe_on(Square(rank, 3))
            && self.king_safe_on(Square(rank, 2))
        {
            moves.push(castle(us, from, Square(rank, 2)));
        }
    }
}

fn castle(color: Color, from: Square, to: Square) -> Move {
    let mut mv = Move::new(from, to, (color, Piece::King), None);
    mv.is_castling = true;
    mv
}
