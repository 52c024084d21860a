//! `filter` / `try_filter`: keep values matching a predicate.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::error::StreamError;
use crate::observable::Observable;
use crate::observers::{Observer, ObserverRef};

struct FilterObserver<T, P> {
    operator: &'static str,
    downstream: ObserverRef<T>,
    predicate: Arc<P>,
}

impl<T, P> Observer<T> for FilterObserver<T, P>
where
    T: 'static,
    P: Fn(&T) -> Result<bool, StreamError> + Send + Sync + 'static,
{
    fn on_next(&self, value: T) {
        match catch_unwind(AssertUnwindSafe(|| (self.predicate)(&value))) {
            Ok(Ok(true)) => self.downstream.on_next(value),
            Ok(Ok(false)) => {}
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
    /// Forwards only values for which `predicate` returns `true`.
    ///
    /// A panic inside `predicate` is delivered as [`StreamError::Panicked`] for
    /// that value only.
    pub fn filter<P>(&self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter_with("filter", move |v| Ok(predicate(v)))
    }

    /// Like [`filter`](Self::filter), with a fallible predicate.
    ///
    /// `Err(e)` is delivered as [`StreamError::Operator`] for that value only.
    pub fn try_filter<E, P>(&self, predicate: P) -> Observable<T>
    where
        E: std::error::Error + Send + Sync + 'static,
        P: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
    {
        self.filter_with("try_filter", move |v| {
            predicate(v).map_err(|e| StreamError::operator("try_filter", e))
        })
    }

    fn filter_with<P>(&self, operator: &'static str, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> Result<bool, StreamError> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let predicate = Arc::new(predicate);
        Observable::create(move |downstream: ObserverRef<T>| {
            upstream.subscribe(FilterObserver {
                operator,
                downstream,
                predicate: Arc::clone(&predicate),
            });
        })
    }
}
