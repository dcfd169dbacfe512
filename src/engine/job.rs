//! Cancelable search jobs.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{error, trace};
use parking_lot::Mutex;

use crate::board::{run_search, Move, MoveList, Position, SearchConfig, SearchOutcome, SearchStats};
use crate::sync::StopFlag;

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// State of a search job as seen by its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPoll {
    /// Still running
    Pending,
    /// Finished; `None` when the root had no legal move
    Finished(Option<Move>),
    /// Cancelled, or the worker died; there is no result
    Discarded,
}

/// Handle to one in-flight search.
///
/// Dropping the handle cancels the search. Statistics are recorded here, when
/// the owner receives the result, so a discarded search never shows up in them.
pub struct SearchJob {
    stop: StopFlag,
    receiver: Receiver<SearchOutcome>,
    handle: Option<JoinHandle<()>>,
    settled: Option<SearchPoll>,
    depth: u32,
    stats: Option<Arc<Mutex<SearchStats>>>,
}

/// Start searching `position` in the background.
///
/// `moves` must be the legal moves of `position`. The position is cloned, so
/// the caller may keep using its own copy while the job runs.
#[must_use]
pub fn find_best_move(position: &Position, moves: &MoveList, config: SearchConfig) -> SearchJob {
    spawn_search(position, moves, config, None)
}

pub(crate) fn spawn_search(
    position: &Position,
    moves: &MoveList,
    config: SearchConfig,
    stats: Option<Arc<Mutex<SearchStats>>>,
) -> SearchJob {
    let stop = StopFlag::new();
    let (sender, receiver) = mpsc::channel();

    let mut worker_position = position.clone();
    let root: Vec<Move> = moves.iter().copied().collect();
    let worker_stop = stop.clone();
    let depth = config.depth;

    let spawned = thread::Builder::new()
        .name("search".to_string())
        .stack_size(SEARCH_STACK_SIZE)
        .spawn(move || {
            let Some(outcome) = run_search(&mut worker_position, &root, &config, &worker_stop) else {
                trace!("search stopped before finishing");
                return;
            };
            // The owner may have gone away already; nobody is left to tell.
            let _ = sender.send(outcome);
        });

    match spawned {
        Ok(handle) => {
            trace!("search job spawned for {} root moves", moves.len());
            SearchJob {
                stop,
                receiver,
                handle: Some(handle),
                settled: None,
                depth,
                stats,
            }
        }
        Err(err) => {
            error!("failed to spawn search thread: {err}");
            SearchJob {
                stop,
                receiver,
                handle: None,
                settled: Some(SearchPoll::Discarded),
                depth,
                stats,
            }
        }
    }
}

impl SearchJob {
    /// Check for a result without blocking.
    pub fn try_poll(&mut self) -> SearchPoll {
        if let Some(settled) = self.settled {
            return settled;
        }
        let poll = match self.receiver.try_recv() {
            Ok(outcome) => self.finish(&outcome),
            Err(TryRecvError::Empty) => return SearchPoll::Pending,
            Err(TryRecvError::Disconnected) => SearchPoll::Discarded,
        };
        self.settle(poll)
    }

    /// Block until the job finishes or is discarded.
    pub fn wait(mut self) -> SearchPoll {
        if let Some(settled) = self.settled {
            return settled;
        }
        let poll = match self.receiver.recv() {
            Ok(outcome) => self.finish(&outcome),
            Err(_) => SearchPoll::Discarded,
        };
        self.settle(poll)
    }

    /// Stop the search and wait for its thread. Any result is thrown away.
    pub fn cancel(&mut self) {
        if self.settled.is_none() {
            trace!("cancelling search job");
        }
        self.stop.stop();
        self.settle(SearchPoll::Discarded);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.settled.is_some()
    }

    fn finish(&self, outcome: &SearchOutcome) -> SearchPoll {
        if let Some(stats) = &self.stats {
            stats.lock().record(self.depth, outcome);
        }
        SearchPoll::Finished(outcome.best_move)
    }

    fn settle(&mut self, poll: SearchPoll) -> SearchPoll {
        let poll = *self.settled.get_or_insert(poll);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("search worker panicked");
            } else {
                trace!("search job joined");
            }
        }
        poll
    }
}

impl Drop for SearchJob {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pruning, DEFAULT_DEPTH};

    #[test]
    fn test_job_finishes_with_legal_move() {
        let mut position = Position::new();
        let moves = position.valid_moves();
        let job = find_best_move(&position, &moves, SearchConfig::default().with_depth(2));
        match job.wait() {
            SearchPoll::Finished(Some(mv)) => assert!(moves.contains(&mv)),
            other => panic!("unexpected poll result {other:?}"),
        }
    }

    #[test]
    fn test_cancelled_job_is_discarded() {
        let mut position = Position::new();
        let moves = position.valid_moves();
        let config = SearchConfig::default()
            .with_depth(DEFAULT_DEPTH + 3)
            .with_pruning(Pruning::None);
        let mut job = find_best_move(&position, &moves, config);
        job.cancel();
        assert_eq!(job.try_poll(), SearchPoll::Discarded);
        assert!(job.is_finished());
    }

    #[test]
    fn test_empty_move_list_finishes_without_move() {
        let mut position = Position::new();
        position
            .apply_coordinate_moves(["f2f3", "e7e5", "g2g4", "d8h4"])
            .unwrap();
        let moves = position.valid_moves();
        let job = find_best_move(&position, &moves, SearchConfig::default());
        assert_eq!(job.wait(), SearchPoll::Finished(None));
    }

    #[test]
    fn test_discarded_result_leaves_stats_alone() {
        let mut position = Position::new();
        let moves = position.valid_moves();
        let stats = Arc::new(Mutex::new(SearchStats::default()));
        let config = SearchConfig::default().with_depth(1);
        let mut job = spawn_search(&position, &moves, config, Some(Arc::clone(&stats)));

        // Let the worker finish and send before the owner throws it away.
        while !job.handle.as_ref().is_some_and(JoinHandle::is_finished) {
            std::thread::yield_now();
        }
        job.cancel();
        assert_eq!(job.try_poll(), SearchPoll::Discarded);
        assert_eq!(stats.lock().searches, 0);
    }

    #[test]
    fn test_received_result_updates_stats() {
        let mut position = Position::new();
        let moves = position.valid_moves();
        let stats = Arc::new(Mutex::new(SearchStats::default()));
        let config = SearchConfig::default().with_depth(2);
        let job = spawn_search(&position, &moves, config, Some(Arc::clone(&stats)));

        let SearchPoll::Finished(Some(mv)) = job.wait() else {
            panic!("search should finish with a move");
        };
        let recorded = *stats.lock();
        assert_eq!(recorded.searches, 1);
        assert_eq!(recorded.depth, 2);
        assert_eq!(recorded.best_move, Some(mv));
    }

    #[test]
    fn test_poll_result_is_sticky() {
        let mut position = Position::new();
        let moves = position.valid_moves();
        let mut job = find_best_move(&position, &moves, SearchConfig::default().with_depth(1));
        let first = loop {
            match job.try_poll() {
                SearchPoll::Pending => std::thread::yield_now(),
                settled => break settled,
            }
        };
        assert!(matches!(first, SearchPoll::Finished(Some(_))));
        assert_eq!(job.try_poll(), first);
    }
}
