use super::super::attacks::{along_axis, CheckInfo};
use super::super::{Color, Direction, Move, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn pawn_moves(&self, from: Square, info: &CheckInfo, moves: &mut MoveList) {
        let us = self.side_to_move();
        let dir = us.pawn_direction();
        let pin = info.pin_direction(from);
        let allowed = |step: Direction| pin.map_or(true, |axis| along_axis(step, axis));

        if allowed((dir, 0)) {
            if let Some(one) = from.offset((dir, 0), 1).filter(|&sq| self.is_empty(sq)) {
                moves.push(self.pawn_move(from, one));
                if from.0 == us.pawn_start_rank() {
                    if let Some(two) = from.offset((dir, 0), 2).filter(|&sq| self.is_empty(sq)) {
                        moves.push(self.pawn_move(from, two));
                    }
                }
            }
        }

        for df in [-1, 1] {
            let step = (dir, df);
            if !allowed(step) {
                continue;
            }
            let Some(to) = from.offset(step, 1) else {
                continue;
            };
            match self.piece_at(to) {
                Some((color, _)) if color != us => moves.push(self.pawn_move(from, to)),
                None if self.en_passant_target == Some(to) => {
                    let victim = Square(from.0, to.1);
                    if !self.en_passant_exposes_king(from, victim) {
                        let mut mv = Move::new(
                            from,
                            to,
                            (us, Piece::Pawn),
                            Some((us.opponent(), Piece::Pawn)),
                        );
                        mv.is_en_passant = true;
                        moves.push(mv);
                    }
                }
                _ => {}
            }
        }
    }

    fn pawn_move(&self, from: Square, to: Square) -> Move {
        let mut mv = self.create_move(from, to, Piece::Pawn);
        mv.is_promotion = to.0 == self.side_to_move().pawn_promotion_rank();
        mv
    }

    /// Would the capture expose our king? Lifting both pawns off the king's
    /// rank may open it to a rook or queen, and removing the victim may open a
    /// diagonal. The first piece met beyond the vacated squares decides.
    fn en_passant_exposes_king(&self, from: Square, victim: Square) -> bool {
        let us = self.side_to_move();
        let king = self.king_square(us);

        if king.0 == from.0 {
            let step = if victim.1 > king.1 { 1 } else { -1 };
            return self
                .first_piece_beyond(king, (0, step), &[from, victim])
                .is_some_and(|(color, piece)| color != us && piece.attacks_straight());
        }

        let dr = victim.0 as isize - king.0 as isize;
        let df = victim.1 as isize - king.1 as isize;
        if dr.abs() != df.abs() {
            return false;
        }
        self.first_piece_beyond(king, (dr.signum(), df.signum()), &[victim])
            .is_some_and(|(color, piece)| color != us && piece.attacks_diagonally())
    }

    /// First piece met walking from `origin` along `dir`, treating `vacated`
    /// as empty.
    fn first_piece_beyond(
        &self,
        origin: Square,
        dir: Direction,
        vacated: &[Square],
    ) -> Option<(Color, Piece)> {
        (1..8)
            .map_while(|distance| origin.offset(dir, distance))
            .filter(|sq| !vacated.contains(sq))
            .find_map(|sq| self.piece_at(sq))
    }
}
