use super::super::attacks::{CheckInfo, KNIGHT_TARGETS};
use super::super::{MoveList, Piece, Position, Square};

impl Position {
    /// A pinned knight can never stay on its pin line, so it gets no moves.
    pub(crate) fn knight_moves(&self, from: Square, info: &CheckInfo, moves: &mut MoveList) {
        if info.pin_direction(from).is_some() {
            return;
        }
        let us = self.side_to_move();
        for &(to, _) in &KNIGHT_TARGETS[from.as_index()] {
            if self.color_on(to) != Some(us) {
                moves.push(self.create_move(from, to, Piece::Knight));
            }
        }
    }
}
