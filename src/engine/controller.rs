//! Engine controller implementation.

use std::sync::Arc;

use log::trace;
use parking_lot::Mutex;
use rand::prelude::*;

use super::job::{spawn_search, SearchJob, SearchPoll};
use crate::board::{
    find_random_move, Move, MoveList, MoveParseError, Position, SearchConfig, SearchStats,
};

/// Owns the authoritative game position and at most one background search.
///
/// Every call that changes the position cancels the search in flight first,
/// so a result never refers to a stale position.
pub struct EngineController {
    position: Position,
    config: SearchConfig,
    job: Option<SearchJob>,
    stats: Arc<Mutex<SearchStats>>,
    rng: StdRng,
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineController {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create a controller whose searches use `config`.
    ///
    /// A configured seed also seeds the random fallback move.
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        EngineController {
            position: Position::new(),
            config,
            job: None,
            stats: Arc::new(Mutex::new(SearchStats::default())),
            rng,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the position, e.g. one loaded from FEN.
    pub fn set_position(&mut self, position: Position) {
        self.cancel_search();
        self.position = position;
    }

    /// Reset to the starting position.
    pub fn new_game(&mut self) {
        self.cancel_search();
        self.position = Position::new();
    }

    pub fn valid_moves(&mut self) -> MoveList {
        self.position.valid_moves()
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.position.is_in_check()
    }

    /// Play `mv` if it is legal in the current position.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveParseError> {
        if !self.position.valid_moves().contains(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        self.cancel_search();
        self.position.apply_move(mv);
        Ok(())
    }

    /// Play a move given in coordinate form, e.g. `e2e4`.
    pub fn play_coordinate(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.position.find_legal_move(text)?;
        self.cancel_search();
        self.position.apply_move(&mv);
        Ok(mv)
    }

    /// Take back the last move. Does nothing at the start of the game.
    pub fn undo(&mut self) {
        self.cancel_search();
        self.position.undo_move();
    }

    /// Start searching the current position, cancelling any earlier search.
    pub fn start_search(&mut self) {
        self.cancel_search();
        let moves = self.position.valid_moves();
        self.job = Some(spawn_search(
            &self.position,
            &moves,
            self.config.clone(),
            Some(Arc::clone(&self.stats)),
        ));
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.job.as_ref().is_some_and(|job| !job.is_finished())
    }

    /// Check the search in flight without blocking. Without a search this
    /// reports `Discarded`.
    pub fn poll(&mut self) -> SearchPoll {
        self.job
            .as_mut()
            .map_or(SearchPoll::Discarded, SearchJob::try_poll)
    }

    /// Block until the current search settles.
    pub fn wait(&mut self) -> SearchPoll {
        self.job
            .take()
            .map_or(SearchPoll::Discarded, SearchJob::wait)
    }

    pub fn cancel_search(&mut self) {
        if let Some(mut job) = self.job.take() {
            trace!("controller cancelling search");
            job.cancel();
        }
    }

    /// The move to play: the search result if there is one, otherwise a
    /// uniformly random legal move. `None` only when the game is over.
    pub fn resolve_move(&mut self, found: Option<Move>) -> Option<Move> {
        if found.is_some() {
            return found;
        }
        let moves = self.position.valid_moves();
        find_random_move(moves.as_slice(), &mut self.rng)
    }

    /// Search synchronously and play the resulting move.
    pub fn play_engine_move(&mut self) -> Option<Move> {
        self.start_search();
        let found = match self.wait() {
            SearchPoll::Finished(found) => found,
            SearchPoll::Pending | SearchPoll::Discarded => None,
        };
        let mv = self.resolve_move(found)?;
        self.position.apply_move(&mv);
        Some(mv)
    }

    /// Statistics of the last finished search.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        *self.stats.lock()
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        self.cancel_search();
    }
}
