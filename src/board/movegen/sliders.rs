use super::super::attacks::{along_axis, CheckInfo};
use super::super::{Direction, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[Direction],
        info: &CheckInfo,
        moves: &mut MoveList,
    ) {
        let us = self.side_to_move();
        let pin = info.pin_direction(from);

        for &dir in directions {
            if pin.is_some_and(|axis| !along_axis(dir, axis)) {
                continue;
            }
            for distance in 1..8 {
                let Some(to) = from.offset(dir, distance) else {
                    break;
                };
                match self.color_on(to) {
                    None => moves.push(self.create_move(from, to, piece)),
                    Some(color) if color != us => {
                        moves.push(self.create_move(from, to, piece));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
