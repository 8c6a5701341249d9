use std::sync::atomic::{AtomicBool, Ordering};

/// Page-wide "already done" marker with idempotent ensure semantics.
///
/// Used for side effects that must happen at most once per page session,
/// such as injecting a remote script or patching a browser prototype.
pub struct InitOnce {
    done: AtomicBool,
}

impl InitOnce {
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Runs `init` unless a previous call already succeeded. The flag is only
    /// set when `init` returns `Ok`, so a failed attempt can be retried.
    /// Returns `Ok(true)` when `init` ran during this call.
    pub fn ensure<E>(&self, init: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        if self.is_done() {
            return Ok(false);
        }
        init()?;
        self.done.store(true, Ordering::Relaxed);
        Ok(true)
    }

    /// Re-arms the flag after the side effect has been undone.
    pub fn reset(&self) {
        self.done.store(false, Ordering::Relaxed);
    }
}
