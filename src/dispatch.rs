//! In-flight tracking shared by the loader and the mutation operations.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Readable from a view while the owning operation is running.
#[derive(Clone, Debug, Default)]
pub struct PendingFlag {
    inner: Arc<AtomicBool>,
}

impl PendingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }

    /// Sets the flag until the returned guard is dropped.
    pub fn begin(&self) -> PendingGuard {
        self.inner.store(true, Ordering::SeqCst);
        PendingGuard {
            inner: self.inner.clone(),
        }
    }
}

#[derive(Debug)]
pub struct PendingGuard {
    inner: Arc<AtomicBool>,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.inner.store(false, Ordering::SeqCst);
    }
}

/// Result of one form operation. None of these are fatal to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded.
    Done,
    /// Local validation or an upload pre-check failed; nothing was sent.
    Blocked,
    /// The request was sent and failed; the message was shown as a notice.
    Failed(String),
    /// No user identity; nothing was attempted.
    Skipped,
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
