//! Cancellation token shared between a search job and its owner.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Raised by the owner of a search to ask the worker to give up.
///
/// The search polls it at every node and unwinds without producing a result
/// once it is set. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    #[must_use]
    pub fn new() -> Self {
        StopFlag(Arc::new(AtomicBool::new(false)))
    }

    /// A flag that is already raised.
    #[must_use]
    pub fn stopped() -> Self {
        StopFlag(Arc::new(AtomicBool::new(true)))
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}
