//! # Per-subscription cancellation handle.
//!
//! Every call to [`Observable::subscribe`](crate::Observable::subscribe) allocates a
//! fresh disposed-flag and returns a [`Disposable`] bound to it. The only reader of
//! the flag is the disposal guard wrapped around the subscriber's observer.
//!
//! ## Rules
//! - The flag moves `false → true` once and never back.
//! - [`Disposable::dispose`] is idempotent and safe from any thread.
//! - Disposal stops **delivery** to the guarded observer. It does not signal the
//!   producer, upstream operators or already-scheduled jobs to stop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Revocable handle returned by `subscribe`.
///
/// Cheap to clone; all clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct Disposable {
    disposed: Arc<AtomicBool>,
}

impl Disposable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.disposed)
    }

    /// Stops further delivery to the observer guarded by this handle.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
    }

    /// True once [`dispose`](Self::dispose) has been called on any clone.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}
