//! Single-shot timer for the deferred computer move.
//!
//! The delay is pacing only. Cancelling a pending timer guarantees its
//! action is skipped if it has not started yet; an action that already
//! started runs to completion.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::sync::CancelFlag;

/// A pending action that fires once after a delay unless cancelled.
#[derive(Debug)]
pub struct AiTimer {
    handle: Option<JoinHandle<()>>,
    cancel: CancelFlag,
}

impl AiTimer {
    /// Start a timer that runs `action` after `delay`.
    ///
    /// `action` receives the timer's cancel flag so it can re-check it once
    /// it holds whatever lock guards the state it touches.
    pub fn start<F>(delay: Duration, action: F) -> Self
    where
        F: FnOnce(&CancelFlag) + Send + 'static,
    {
        let cancel = CancelFlag::new();
        let flag = cancel.clone();
        let handle = thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            if flag.is_cancelled() {
                log::trace!("ai timer cancelled before firing");
                return;
            }
            action(&flag);
        });

        AiTimer {
            handle: Some(handle),
            cancel,
        }
    }

    /// Cancel the timer without waiting for its thread.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Wait for the timer thread to finish (fired or skipped).
    pub fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("ai timer thread panicked");
            }
        }
    }
}
