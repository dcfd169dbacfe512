//! Strictly legal move generation.
//!
//! Pseudo-legal moves are produced per occupied square of the side to move in
//! rank-major order, already respecting pins. The check filter below then
//! keeps only the moves that resolve a single check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{Check, CheckInfo, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};
use super::{Move, MoveList, Piece, Position, Square};

impl Position {
    /// Build a plain move for the side to move, capturing whatever stands on
    /// `to`.
    #[inline]
    pub(crate) fn create_move(&self, from: Square, to: Square, piece: Piece) -> Move {
        Move::new(from, to, (self.side_to_move(), piece), self.piece_at(to))
    }

    fn generate_pseudo_moves(&mut self, info: &CheckInfo, moves: &mut MoveList) {
        let us = self.side_to_move();
        let origins: Vec<(Square, Piece)> = self
            .pieces()
            .filter(|&(_, color, _)| color == us)
            .map(|(sq, _, piece)| (sq, piece))
            .collect();

        for (from, piece) in origins {
            match piece {
                Piece::Pawn => self.pawn_moves(from, info, moves),
                Piece::Knight => self.knight_moves(from, info, moves),
                Piece::Bishop => self.slider_moves(from, piece, &DIAGONAL, info, moves),
                Piece::Rook => self.slider_moves(from, piece, &ORTHOGONAL, info, moves),
                Piece::Queen => self.slider_moves(from, piece, &ALL_DIRECTIONS, info, moves),
                Piece::King => self.king_moves(from, moves),
            }
        }
    }

    /// Squares a non-king move may land on to answer `check`: the checker
    /// itself, plus the squares between it and the king for a slider.
    fn check_blocking_squares(&self, check: &Check) -> Vec<Square> {
        if self.piece_on(check.attacker) == Some(Piece::Knight) {
            return vec![check.attacker];
        }
        let king = self.king_square(self.side_to_move());
        let mut squares = Vec::with_capacity(7);
        for distance in 1..8 {
            let Some(sq) = king.offset(check.direction, distance) else {
                break;
            };
            squares.push(sq);
            if sq == check.attacker {
                break;
            }
        }
        squares
    }

    /// All legal moves for the side to move.
    ///
    /// Also refreshes the cached checkmate and stalemate flags.
    pub fn valid_moves(&mut self) -> MoveList {
        let info = self.pins_and_checks();
        let king = self.king_square(self.side_to_move());
        let mut moves = MoveList::new();

        match info.checks.as_slice() {
            [] => {
                self.generate_pseudo_moves(&info, &mut moves);
                self.castle_moves(king, &mut moves);
            }
            [check] => {
                self.generate_pseudo_moves(&info, &mut moves);
                let targets = self.check_blocking_squares(check);
                let checker = check.attacker;
                moves.retain(|m| {
                    m.piece() == Piece::King
                        || targets.contains(&m.to())
                        || (m.is_en_passant() && m.en_passant_victim() == checker)
                });
            }
            // Double check: only the king can move.
            _ => self.king_moves(king, &mut moves),
        }

        self.checkmate = moves.is_empty() && info.in_check;
        self.stalemate = moves.is_empty() && !info.in_check;
        moves
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in &moves {
            self.apply_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
