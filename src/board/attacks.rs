//! Pin and check detection for the side to move.
//!
//! Rays are cast outward from the king. The first allied piece on a ray is a
//! pin candidate; the first enemy piece either attacks along the ray (giving a
//! check, or a pin if a candidate stands in between) or ends the ray. Knight
//! checks are found separately since knights jump and cannot pin.

use once_cell::sync::Lazy;

use super::{Color, Direction, Piece, Position, Square};

/// Orthogonal directions (rook and queen rays).
pub(crate) const ORTHOGONAL: [Direction; 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

/// Diagonal directions (bishop and queen rays).
pub(crate) const DIAGONAL: [Direction; 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// All eight king directions: orthogonal first, then diagonal.
pub(crate) const ALL_DIRECTIONS: [Direction; 8] = [
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

pub(crate) const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight destinations for every square, in `KNIGHT_OFFSETS` order.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<(Square, Direction)>>> =
    Lazy::new(|| neighbour_table(&KNIGHT_OFFSETS));

/// On-board king destinations for every square, in `ALL_DIRECTIONS` order.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<(Square, Direction)>>> =
    Lazy::new(|| neighbour_table(&ALL_DIRECTIONS));

fn neighbour_table(offsets: &[Direction]) -> Vec<Vec<(Square, Direction)>> {
    Square::all()
        .map(|from| {
            offsets
                .iter()
                .filter_map(|&dir| from.offset(dir, 1).map(|to| (to, dir)))
                .collect()
        })
        .collect()
}

/// An allied piece that may only move along `direction` (either sign).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Ray from the king towards the pinning piece
    pub direction: Direction,
}

/// An enemy piece attacking the king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    /// Ray (or knight offset) from the king towards the attacker
    pub direction: Direction,
}

/// Output of the attack detector for the side to move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    /// Pin axis of the piece on `sq`, if it is pinned
    #[must_use]
    pub fn pin_direction(&self, sq: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.square == sq)
            .map(|pin| pin.direction)
    }
}

/// Returns true if stepping along `step` keeps to the line of `axis`.
#[inline]
pub(crate) fn along_axis(step: Direction, axis: Direction) -> bool {
    step == axis || step == (-axis.0, -axis.1)
}

impl Position {
    /// Pins and checks against the side to move, seen from its stored king
    /// square.
    #[must_use]
    pub fn pins_and_checks(&self) -> CheckInfo {
        let us = self.side_to_move();
        let them = us.opponent();
        let king = self.king_square(us);
        let mut info = CheckInfo::default();

        for (j, &dir) in ALL_DIRECTIONS.iter().enumerate() {
            let orthogonal = j < 4;
            let mut candidate: Option<Square> = None;

            for distance in 1..8 {
                let Some(sq) = king.offset(dir, distance) else {
                    break;
                };
                match self.piece_at(sq) {
                    None => {}
                    Some((color, piece)) if color == us => {
                        // Our own king is transparent: it may be standing on
                        // its old square while a new one is being tried.
                        if piece == Piece::King {
                            continue;
                        }
                        if candidate.is_some() {
                            break;
                        }
                        candidate = Some(sq);
                    }
                    Some((_, piece)) => {
                        if attacks_along_ray(piece, them, dir, orthogonal, distance) {
                            match candidate {
                                Some(pinned) => info.pins.push(Pin {
                                    square: pinned,
                                    direction: dir,
                                }),
                                None => {
                                    info.in_check = true;
                                    info.checks.push(Check {
                                        attacker: sq,
                                        direction: dir,
                                    });
                                }
                            }
                        }
                        break;
                    }
                }
            }
        }

        for &(sq, dir) in &KNIGHT_TARGETS[king.as_index()] {
            if self.piece_at(sq) == Some((them, Piece::Knight)) {
                info.in_check = true;
                info.checks.push(Check {
                    attacker: sq,
                    direction: dir,
                });
            }
        }

        info
    }

    /// Returns true if the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.pins_and_checks().in_check
    }

    /// Returns true if `color`'s king is attacked, whoever is to move.
    ///
    /// Flips the side to move for the duration of the query; the exclusive
    /// borrow keeps that intermediate state private.
    pub fn king_attacked(&mut self, color: Color) -> bool {
        let saved = self.white_to_move;
        self.white_to_move = color == Color::White;
        let attacked = self.is_in_check();
        self.white_to_move = saved;
        attacked
    }

    /// Returns true if the side to move's king would be safe on `sq`.
    ///
    /// The stored king square is moved for the query and restored afterwards.
    pub(crate) fn king_safe_on(&mut self, sq: Square) -> bool {
        let idx = self.side_to_move().index();
        let home = self.king_squares[idx];
        self.king_squares[idx] = sq;
        let safe = !self.pins_and_checks().in_check;
        self.king_squares[idx] = home;
        safe
    }
}

/// Does an enemy `piece` met at `distance` along `dir` from our king attack it?
fn attacks_along_ray(
    piece: Piece,
    enemy: Color,
    dir: Direction,
    orthogonal: bool,
    distance: isize,
) -> bool {
    match piece {
        Piece::Queen => true,
        Piece::Rook => orthogonal,
        Piece::Bishop => !orthogonal,
        // An enemy pawn attacks towards its own forward direction, so it sits
        // one rank "behind" that direction from our king's point of view.
        Piece::Pawn => distance == 1 && !orthogonal && dir.0 == -enemy.pawn_direction(),
        Piece::King => distance == 1,
        Piece::Knight => false,
    }
}
