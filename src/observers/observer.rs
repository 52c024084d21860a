//! # Observer: the three-method event sink
//!
//! The [`Observer`] trait is the consumer side of every stream. End users
//! implement it to receive values; every operator implements it too, as an
//! intercepting adapter sitting between its upstream and its downstream.
//!
//! ```text
//! producer ──► SafeObserver ──► MapObserver ──► SafeObserver ──► user Observer
//!              (disposal guard)  (operator)     (disposal guard)
//! ```
//!
//! ## Contract
//! - At most one terminal call (`on_error` or `on_complete`).
//! - No `on_next` after a terminal call.
//! - Calls for one subscription are made sequentially, never concurrently.
//!
//! The contract is **not** enforced by the library: callers honor it, adapters
//! forward whatever they receive.
//!
//! # Example: custom observer
//! ```rust
//! use std::sync::atomic::{AtomicI64, Ordering};
//! use pushflow::{Observable, Observer, StreamError};
//!
//! #[derive(Default)]
//! struct Sum(AtomicI64);
//!
//! impl Observer<i64> for Sum {
//!     fn on_next(&self, value: i64) {
//!         self.0.fetch_add(value, Ordering::Relaxed);
//!     }
//!     fn on_error(&self, _error: StreamError) {}
//!     fn on_complete(&self) {}
//! }
//!
//! let sum = std::sync::Arc::new(Sum::default());
//! Observable::from_iter(vec![1_i64, 2, 3]).subscribe(sum.clone());
//! assert_eq!(sum.0.load(Ordering::Relaxed), 6);
//! ```

use std::sync::Arc;

use crate::error::StreamError;

/// Consumer of a push-based stream.
///
/// Methods take `&self`: one observer may be driven from a scheduler thread
/// other than the one that subscribed, so implementations keep their state
/// in atomics or locks.
pub trait Observer<T>: Send + Sync + 'static {
    /// Receives the next value.
    fn on_next(&self, value: T);

    /// Receives a terminal error.
    fn on_error(&self, error: StreamError);

    /// Receives terminal completion.
    fn on_complete(&self);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to an observer (`Arc<dyn Observer<T>>`).
pub type ObserverRef<T> = Arc<dyn Observer<T>>;

impl<T, O> Observer<T> for Arc<O>
where
    O: Observer<T> + ?Sized,
{
    fn on_next(&self, value: T) {
        (**self).on_next(value)
    }

    fn on_error(&self, error: StreamError) {
        (**self).on_error(error)
    }

    fn on_complete(&self) {
        (**self).on_complete()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
