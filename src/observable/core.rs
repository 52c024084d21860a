//! # Observable core: lazy construction and subscription.
//!
//! An [`Observable`] is nothing but a shared producer closure. Building one,
//! or deriving one through an operator, runs no user code. Work happens only
//! inside [`Observable::subscribe`]:
//!
//! ```text
//! subscribe(observer)
//!   ├─► allocate disposed-flag + Disposable
//!   ├─► wrap observer in SafeObserver (checks flag before each forward)
//!   ├─► producer(SafeObserver)      ← synchronous, on the calling thread
//!   └─► return Disposable
//! ```
//!
//! ## Rules
//! - Every `subscribe` re-runs the producer; subscriptions share nothing.
//! - Panics raised by the producer are **not** caught; they unwind out of `subscribe`.
//! - Disposal silences the guarded observer only; the producer keeps running.

use std::fmt;
use std::sync::Arc;

use crate::disposable::Disposable;
use crate::observers::{Observer, ObserverRef, SafeObserver};

type Producer<T> = dyn Fn(ObserverRef<T>) + Send + Sync;

/// Lazy, re-runnable description of a push-based event sequence.
///
/// Cloning is cheap (one `Arc` bump) and yields the same stream description.
pub struct Observable<T> {
    producer: Arc<Producer<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Creates a stream from a producer closure.
    ///
    /// The closure is stored and nothing else happens. It runs once per
    /// [`subscribe`](Self::subscribe) call and pushes events into the observer
    /// it receives.
    ///
    /// # Example
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use pushflow::{Observable, Observer, ObserverFn, StreamError};
    ///
    /// let numbers = Observable::create(|obs| {
    ///     obs.on_next(1);
    ///     obs.on_next(2);
    ///     obs.on_complete();
    /// });
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// numbers.subscribe(ObserverFn::new(
    ///     "collect",
    ///     move |v: i32| sink.lock().unwrap().push(v),
    ///     |_e: StreamError| {},
    ///     || {},
    /// ));
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    /// ```
    pub fn create<P>(producer: P) -> Self
    where
        P: Fn(ObserverRef<T>) + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
        }
    }

    /// Runs the producer against `observer` and returns the subscription's handle.
    ///
    /// The producer runs synchronously on the calling thread; `subscribe` returns
    /// when it does (unless a relocation operator moved the work elsewhere).
    pub fn subscribe<O>(&self, observer: O) -> Disposable
    where
        O: Observer<T>,
    {
        let disposable = Disposable::new();
        let guarded: ObserverRef<T> =
            Arc::new(SafeObserver::new(Arc::new(observer), disposable.flag()));
        (self.producer)(guarded);
        disposable
    }
}
