pub mod board;
pub mod engine;
pub mod sync;

pub use board::{Color, Move, MoveList, Piece, Position, Square};
pub use engine::{find_best_move, EngineController, SearchJob, SearchPoll};
