//! Convenience sources built on [`Observable::create`].

use crate::error::StreamError;
use crate::observable::Observable;
use crate::observers::Observer;

impl<T: Send + 'static> Observable<T> {
    /// Emits each item of `items`, then completes.
    ///
    /// The iterable is cloned per subscription, so every subscriber sees the
    /// full sequence.
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
    {
        Observable::create(move |obs| {
            for item in items.clone() {
                obs.on_next(item);
            }
            obs.on_complete();
        })
    }

    /// Emits `value`, then completes.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Observable::create(move |obs| {
            obs.on_next(value.clone());
            obs.on_complete();
        })
    }

    /// Completes immediately without emitting.
    pub fn empty() -> Self {
        Observable::create(|obs| obs.on_complete())
    }

    /// Fails immediately with `error`.
    pub fn failed(error: StreamError) -> Self {
        Observable::create(move |obs| obs.on_error(error.clone()))
    }
}
