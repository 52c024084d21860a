//! # Function-backed observer (`ObserverFn`)
//!
//! [`ObserverFn`] wraps three closures, one per observer method. Closures are
//! `Fn`, not `FnMut`: if they need state, capture an `Arc<Mutex<..>>` or an
//! atomic explicitly.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use pushflow::{Observable, ObserverFn, StreamError};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let observer = ObserverFn::new(
//!     "collect",
//!     move |v: i32| sink.lock().unwrap().push(v),
//!     |_e: StreamError| {},
//!     || {},
//! );
//!
//! Observable::from_iter(vec![1, 2]).subscribe(observer);
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::StreamError;
use crate::observers::Observer;

/// Closure-backed observer.
pub struct ObserverFn<T, N, E, C> {
    name: &'static str,
    next: N,
    error: E,
    complete: C,
    _item: PhantomData<fn(T)>,
}

impl<T, N, E, C> ObserverFn<T, N, E, C>
where
    N: Fn(T) + Send + Sync + 'static,
    E: Fn(StreamError) + Send + Sync + 'static,
    C: Fn() + Send + Sync + 'static,
{
    /// Creates a new function-backed observer.
    ///
    /// Prefer [`ObserverFn::arc`] when you immediately need a shared handle.
    pub fn new(name: &'static str, next: N, error: E, complete: C) -> Self {
        Self {
            name,
            next,
            error,
            complete,
            _item: PhantomData,
        }
    }

    /// Creates the observer and returns it behind an `Arc`.
    pub fn arc(name: &'static str, next: N, error: E, complete: C) -> Arc<Self> {
        Arc::new(Self::new(name, next, error, complete))
    }
}

impl<T, N, E, C> Observer<T> for ObserverFn<T, N, E, C>
where
    T: 'static,
    N: Fn(T) + Send + Sync + 'static,
    E: Fn(StreamError) + Send + Sync + 'static,
    C: Fn() + Send + Sync + 'static,
{
    fn on_next(&self, value: T) {
        (self.next)(value)
    }

    fn on_error(&self, error: StreamError) {
        (self.error)(error)
    }

    fn on_complete(&self) {
        (self.complete)()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
