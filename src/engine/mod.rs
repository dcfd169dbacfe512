//! Background search jobs and the game controller that owns the position.
//!
//! A search runs on its own thread against a private copy of the position.
//! Only the chosen move comes back, over a one-shot channel; a cancelled job
//! simply never answers.

mod controller;
mod job;

pub use controller::EngineController;
pub use job::{find_best_move, SearchJob, SearchPoll};
