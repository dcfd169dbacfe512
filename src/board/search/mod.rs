//! Fixed-depth negamax search with optional alpha-beta pruning.
//!
//! Scores are always from the point of view of the side to move at the node.
//! Each call returns its own best move alongside the score, so the root
//! simply reads the move off its own result.

mod params;

use log::{debug, warn};
use rand::prelude::*;

use super::eval::CHECKMATE;
use super::{Move, Position};
use crate::sync::StopFlag;

pub use params::{Pruning, SearchConfig, DEFAULT_DEPTH};

/// Magnitude of a mate score.
pub const MATE: i32 = CHECKMATE;

/// Strictly outside every reachable score, so the first move searched always
/// becomes the running best.
const INFINITY: i32 = MATE + 1;

/// Result of one completed search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    /// Score from the point of view of the side to move at the root
    pub score: i32,
    pub nodes: u64,
}

/// Statistics of the most recently finished search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub searches: u64,
    pub depth: u32,
    pub nodes: u64,
    pub score: i32,
    pub best_move: Option<Move>,
}

impl SearchStats {
    pub fn record(&mut self, depth: u32, outcome: &SearchOutcome) {
        self.searches += 1;
        self.depth = depth;
        self.nodes = outcome.nodes;
        self.score = outcome.score;
        self.best_move = outcome.best_move;
    }
}

struct Searcher<'a> {
    position: &'a mut Position,
    stop: &'a StopFlag,
    pruning: Pruning,
    nodes: u64,
}

impl Searcher<'_> {
    /// Returns `None` once the stop flag is raised; the position is still
    /// restored on the way out.
    fn negamax(
        &mut self,
        moves: &[Move],
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> Option<(i32, Option<Move>)> {
        if self.stop.is_stopped() {
            return None;
        }
        self.nodes += 1;

        // A node without moves is terminal; the flags set by the legality
        // query that produced `moves` tell mate from stalemate.
        if depth == 0 || moves.is_empty() {
            let score = self.position.turn_sign() * self.position.static_score();
            return Some((score, None));
        }

        let mut best_score = -INFINITY;
        let mut best_move = None;
        for mv in moves {
            self.position.apply_move(mv);
            let replies = self.position.valid_moves();
            let child = self.negamax(replies.as_slice(), depth - 1, -beta, -alpha);
            self.position.undo_move();

            let score = -child?.0;
            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            if self.pruning == Pruning::AlphaBeta {
                alpha = alpha.max(best_score);
                if alpha >= beta {
                    break;
                }
            }
        }
        Some((best_score, best_move))
    }
}

/// Plain negamax over `moves` (the legal moves of `position`) in the given
/// order, with the full window. Returns the score for the side to move and
/// the best move, if there was one.
pub fn negamax(
    position: &mut Position,
    moves: &[Move],
    depth: u32,
    pruning: Pruning,
) -> (i32, Option<Move>) {
    let stop = StopFlag::new();
    let mut searcher = Searcher {
        position,
        stop: &stop,
        pruning,
        nodes: 0,
    };
    // The flag above is never raised.
    searcher
        .negamax(moves, depth, -INFINITY, INFINITY)
        .unwrap_or((0, None))
}

/// Search `position` to `config.depth` and pick a move from `moves`.
///
/// `moves` must be the legal moves of `position`. Returns `None` if the search
/// was stopped before it finished.
pub fn run_search(
    position: &mut Position,
    moves: &[Move],
    config: &SearchConfig,
    stop: &StopFlag,
) -> Option<SearchOutcome> {
    if moves.is_empty() {
        warn!("search requested with no legal moves");
    }

    let mut root: Vec<Move> = moves.to_vec();
    if config.shuffle_root {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        root.shuffle(&mut rng);
    }

    let mut searcher = Searcher {
        position,
        stop,
        pruning: config.pruning,
        nodes: 0,
    };
    let (score, best_move) = searcher.negamax(&root, config.depth, -INFINITY, INFINITY)?;
    let outcome = SearchOutcome {
        best_move,
        score,
        nodes: searcher.nodes,
    };

    debug!(
        "search finished: depth={} score={} nodes={} move={}",
        config.depth,
        outcome.score,
        outcome.nodes,
        outcome
            .best_move
            .map_or_else(|| "none".to_string(), |m| m.to_string())
    );
    Some(outcome)
}

/// Pick a move uniformly at random. `None` only for an empty list.
pub fn find_random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece, PositionBuilder, Square};

    #[test]
    fn test_depth_zero_is_static_score() {
        let mut position = Position::new();
        position.apply_coordinate_moves(["e2e4", "d7d5", "e4d5"]).unwrap();
        let moves = position.valid_moves();
        // Black to move, a pawn down.
        let (score, best) = negamax(&mut position, moves.as_slice(), 0, Pruning::AlphaBeta);
        assert_eq!(score, position.turn_sign() * position.static_score());
        assert_eq!(score, -1);
        assert_eq!(best, None);
    }

    #[test]
    fn test_finds_mate_in_one() {
        // Back-rank mate: Ra1-a8.
        let mut position = PositionBuilder::new()
            .piece(Square(0, 6), Color::White, Piece::King)
            .piece(Square(0, 0), Color::White, Piece::Rook)
            .piece(Square(7, 6), Color::Black, Piece::King)
            .piece(Square(6, 5), Color::Black, Piece::Pawn)
            .piece(Square(6, 6), Color::Black, Piece::Pawn)
            .piece(Square(6, 7), Color::Black, Piece::Pawn)
            .build();
        let moves = position.valid_moves();
        let config = SearchConfig::default().with_depth(2).with_seed(7);
        let outcome = run_search(&mut position, moves.as_slice(), &config, &StopFlag::new()).unwrap();
        assert_eq!(outcome.score, MATE);
        let best = outcome.best_move.unwrap();
        assert_eq!((best.from(), best.to()), (Square(0, 0), Square(7, 0)));
    }

    #[test]
    fn test_search_restores_position() {
        let mut position = Position::new();
        let before = position.clone();
        let moves = position.valid_moves();
        let config = SearchConfig::default().with_depth(3).with_seed(1);
        run_search(&mut position, moves.as_slice(), &config, &StopFlag::new()).unwrap();
        assert!(position.same_state(&before));
    }

    #[test]
    fn test_stopped_search_yields_nothing() {
        let mut position = Position::new();
        let moves = position.valid_moves();
        let outcome = run_search(
            &mut position,
            moves.as_slice(),
            &SearchConfig::default(),
            &StopFlag::stopped(),
        );
        assert_eq!(outcome, None);
    }

    #[test]
    fn test_empty_move_list_yields_no_move() {
        let mut position = Position::new();
        position
            .apply_coordinate_moves(["f2f3", "e7e5", "g2g4", "d8h4"])
            .unwrap();
        let moves = position.valid_moves();
        assert!(moves.is_empty());
        let outcome = run_search(
            &mut position,
            moves.as_slice(),
            &SearchConfig::default(),
            &StopFlag::new(),
        )
        .unwrap();
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.score, -MATE);
    }

    #[test]
    fn test_random_move_covers_list() {
        let mut position = Position::new();
        let moves = position.valid_moves();
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            let mv = find_random_move(moves.as_slice(), &mut rng).unwrap();
            assert!(moves.contains(&mv));
            seen.insert(mv);
        }
        assert_eq!(seen.len(), moves.len());
        assert_eq!(find_random_move(&[], &mut rng), None);
    }
}
