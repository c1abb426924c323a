use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag the uploader checks between batches.
///
/// Raising it never interrupts an attempt in flight; the run stops before the
/// next batch starts.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
