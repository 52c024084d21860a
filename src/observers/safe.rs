//! Disposal guard installed by `subscribe`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::StreamError;
use crate::observers::{Observer, ObserverRef};

/// Forwards to `inner` only while the subscription's flag is clear.
///
/// The flag is checked before each forward. A call already in flight when the
/// flag flips still completes.
pub(crate) struct SafeObserver<T> {
    inner: ObserverRef<T>,
    disposed: Arc<AtomicBool>,
}

impl<T> SafeObserver<T> {
    pub(crate) fn new(inner: ObserverRef<T>, disposed: Arc<AtomicBool>) -> Self {
        Self { inner, disposed }
    }

    #[inline]
    fn live(&self) -> bool {
        !self.disposed.load(Ordering::Acquire)
    }
}

impl<T: 'static> Observer<T> for SafeObserver<T> {
    fn on_next(&self, value: T) {
        if self.live() {
            self.inner.on_next(value);
        }
    }

    fn on_error(&self, error: StreamError) {
        if self.live() {
            self.inner.on_error(error);
        }
    }

    fn on_complete(&self) {
        if self.live() {
            self.inner.on_complete();
        }
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
