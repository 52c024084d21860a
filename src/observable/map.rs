//! `map` / `try_map`: transform every value.
//!
//! A faulting mapper (panic or `Err`) turns that one value into an `on_error`
//! downstream. The adapter keeps forwarding whatever upstream sends next.
//! Only the mapper sits inside the unwind boundary; a panicking downstream
//! observer unwinds out of `subscribe` unchanged.

use std::marker::PhantomData;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::error::StreamError;
use crate::observable::Observable;
use crate::observers::{Observer, ObserverRef};

struct MapObserver<T, R, F> {
    operator: &'static str,
    downstream: ObserverRef<R>,
    mapper: Arc<F>,
    _item: PhantomData<fn(T)>,
}

impl<T, R, F> Observer<T> for MapObserver<T, R, F>
where
    T: 'static,
    R: 'static,
    F: Fn(T) -> Result<R, StreamError> + Send + Sync + 'static,
{
    fn on_next(&self, value: T) {
        match catch_unwind(AssertUnwindSafe(|| (self.mapper)(value))) {
            Ok(Ok(mapped)) => self.downstream.on_next(mapped),
            Ok(Err(e)) => self.downstream.on_error(e),
            Err(payload) => self
                .downstream
                .on_error(StreamError::panicked(self.operator, payload.as_ref())),
        }
    }

    fn on_error(&self, error: StreamError) {
        self.downstream.on_error(error);
    }

    fn on_complete(&self) {
        self.downstream.on_complete();
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Applies `mapper` to every value.
    ///
    /// A panic inside `mapper` is delivered as [`StreamError::Panicked`] in place
    /// of that value.
    ///
    /// # Example
    /// ```rust
    /// use pushflow::Observable;
    ///
    /// let labels = Observable::just(5).map(|v| format!("n:{v}"));
    /// # let _ = labels;
    /// ```
    pub fn map<R, F>(&self, mapper: F) -> Observable<R>
    where
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        self.map_with("map", move |v| Ok(mapper(v)))
    }

    /// Applies a fallible `mapper` to every value.
    ///
    /// `Err(e)` is delivered as [`StreamError::Operator`] in place of that value.
    pub fn try_map<R, E, F>(&self, mapper: F) -> Observable<R>
    where
        R: Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + 'static,
    {
        self.map_with("try_map", move |v| {
            mapper(v).map_err(|e| StreamError::operator("try_map", e))
        })
    }

    fn map_with<R, F>(&self, operator: &'static str, mapper: F) -> Observable<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Result<R, StreamError> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let mapper = Arc::new(mapper);
        Observable::create(move |downstream: ObserverRef<R>| {
            upstream.subscribe(MapObserver {
                operator,
                downstream,
                mapper: Arc::clone(&mapper),
                _item: PhantomData,
            });
        })
    }
}
