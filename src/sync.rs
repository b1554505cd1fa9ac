//! Synchronization primitives for the game session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A thread-safe cancellation flag for a pending AI move.
///
/// This wraps `Arc<AtomicBool>`; clones share the same flag.
#[derive(Clone, Debug)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a new flag (initially not cancelled).
    #[must_use]
    pub fn new() -> Self {
        CancelFlag(Arc::new(AtomicBool::new(false)))
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }
}

impl Default for CancelFlag {
    fn default() -> Self {
        Self::new()
    }
}
