use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Caller-owned flag that keeps stitches from overlapping.
///
/// The stitcher itself never looks at this; whoever starts a stitch holds a
/// [`StitchGuard`] for its whole duration.
#[derive(Debug, Default)]
pub struct StitchLock {
    held: AtomicBool,
}

/// Releases the lock on drop, whichever way the stitch ended.
#[derive(Debug)]
pub struct StitchGuard {
    lock: Arc<StitchLock>,
}

impl StitchLock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns `None` if a stitch is already running.
    pub fn try_acquire(self: &Arc<Self>) -> Option<StitchGuard> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| StitchGuard { lock: Arc::clone(self) })
    }
}

impl Drop for StitchGuard {
    fn drop(&mut self) {
        self.lock.held.store(false, Ordering::Release);
        log::debug!("[stitch] lock released");
    }
}
