//! # Observers
//!
//! This module provides the [`Observer`] trait and built-in implementations.
//!
//! - [`Observer`] / [`ObserverRef`]: the consumer contract and its shared handle.
//! - [`ObserverFn`]: closure-backed observer.
//! - [`LogObserver`]: prints every call to stdout (feature `logging`, demo/reference).
//!
//! The disposal guard `subscribe` wraps around every subscriber also lives here
//! but is internal to the crate.

#[cfg(feature = "logging")]
mod log;
mod observer;
mod observer_fn;
mod safe;

#[cfg(feature = "logging")]
pub use log::LogObserver;
pub use observer::{Observer, ObserverRef};
pub use observer_fn::ObserverFn;
pub(crate) use safe::SafeObserver;
