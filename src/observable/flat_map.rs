//! `flat_map` / `try_flat_map`: expand every value into an inner stream.
//!
//! ```text
//! outer on_next(v) ──► mapper(v) ──► inner.subscribe(InnerObserver)
//!                                      ├─ on_next(r)   ──► downstream.on_next(r)
//!                                      ├─ on_error(e)  ──► downstream.on_error(e)
//!                                      └─ on_complete  ──► (swallowed)
//! outer on_complete ──► downstream.on_complete   (the only completion)
//! ```
//!
//! ## Rules
//! - Inner streams are subscribed immediately and unconditionally: no queue,
//!   no concurrency limit.
//! - With synchronous inner streams, each inner stream is fully drained before
//!   the next outer value is processed, so output follows outer order.
//! - With relocated inner streams, interleaving across inner subscriptions is
//!   unspecified.
//! - An inner error is forwarded but does not stop the outer subscription.
//!
//! ## Panics
//! A panic in the mapper, or in an inner producer running synchronously, is
//! delivered downstream as [`StreamError::Panicked`] for that outer value.
//! A panic raised by a downstream observer is not caught here: it unwinds out
//! unchanged, exactly as it does through `map` and `filter`.

use std::marker::PhantomData;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::StreamError;
use crate::observable::Observable;
use crate::observers::{Observer, ObserverRef};

struct FlatMapObserver<T, R, F> {
    operator: &'static str,
    downstream: ObserverRef<R>,
    mapper: Arc<F>,
    _item: PhantomData<fn(T)>,
}

impl<T, R, F> Observer<T> for FlatMapObserver<T, R, F>
where
    T: 'static,
    R: Send + 'static,
    F: Fn(T) -> Result<Observable<R>, StreamError> + Send + Sync + 'static,
{
    fn on_next(&self, value: T) {
        // Subscribing to the inner stream sits inside the unwind boundary too:
        // a panicking inner producer is reported like a panicking mapper.
        let downstream_panicked = Arc::new(AtomicBool::new(false));
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            (self.mapper)(value).map(|inner| {
                inner.subscribe(InnerObserver {
                    downstream: Arc::clone(&self.downstream),
                    panicked: Arc::clone(&downstream_panicked),
                });
            })
        }));

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => self.downstream.on_error(e),
            Err(payload) if downstream_panicked.load(Ordering::Relaxed) => {
                resume_unwind(payload)
            }
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

struct InnerObserver<R> {
    downstream: ObserverRef<R>,
    /// Set when a downstream call unwinds, so the outer boundary re-raises it.
    panicked: Arc<AtomicBool>,
}

impl<R> InnerObserver<R> {
    fn forward(&self, call: impl FnOnce()) {
        if let Err(payload) = catch_unwind(AssertUnwindSafe(call)) {
            self.panicked.store(true, Ordering::Relaxed);
            resume_unwind(payload);
        }
    }
}

impl<R: 'static> Observer<R> for InnerObserver<R> {
    fn on_next(&self, value: R) {
        self.forward(|| self.downstream.on_next(value));
    }

    fn on_error(&self, error: StreamError) {
        self.forward(|| self.downstream.on_error(error));
    }

    // Only the outer stream completes the flattened stream.
    fn on_complete(&self) {}
}

impl<T: Send + 'static> Observable<T> {
    /// Maps every value to an inner [`Observable`] and merges their values.
    ///
    /// # Example
    /// ```rust
    /// use pushflow::Observable;
    ///
    /// let pairs = Observable::from_iter(vec![1, 2])
    ///     .flat_map(|v| Observable::from_iter(vec![v, v * 10]));
    /// # let _ = pairs;
    /// ```
    pub fn flat_map<R, F>(&self, mapper: F) -> Observable<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Observable<R> + Send + Sync + 'static,
    {
        self.flat_map_with("flat_map", move |v| Ok(mapper(v)))
    }

    /// Like [`flat_map`](Self::flat_map), with a fallible mapper.
    ///
    /// `Err(e)` is delivered as [`StreamError::Operator`] in place of that value's
    /// inner stream.
    pub fn try_flat_map<R, E, F>(&self, mapper: F) -> Observable<R>
    where
        R: Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        F: Fn(T) -> Result<Observable<R>, E> + Send + Sync + 'static,
    {
        self.flat_map_with("try_flat_map", move |v| {
            mapper(v).map_err(|e| StreamError::operator("try_flat_map", e))
        })
    }

    fn flat_map_with<R, F>(&self, operator: &'static str, mapper: F) -> Observable<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Result<Observable<R>, StreamError> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let mapper = Arc::new(mapper);
        Observable::create(move |downstream: ObserverRef<R>| {
            upstream.subscribe(FlatMapObserver {
                operator,
                downstream,
                mapper: Arc::clone(&mapper),
                _item: PhantomData,
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{Notification, NotificationKind};
    use crate::testing::{ManualScheduler, Recorder};

    #[derive(Debug, thiserror::Error)]
    #[error("no inner stream for {0}")]
    struct NoInner(i32);

    #[test]
    fn test_flat_map_swallows_inner_completion() {
        let rec = Recorder::new();
        Observable::create(|obs| {
            obs.on_next(1);
            obs.on_next(2);
            obs.on_complete();
        })
        .flat_map(|v: i32| {
            Observable::create(move |inner| {
                inner.on_next(format!("V:{v}"));
                inner.on_complete();
            })
        })
        .subscribe(Arc::clone(&rec));

        assert_eq!(
            rec.events(),
            vec![
                Notification::Next("V:1".to_string()),
                Notification::Next("V:2".to_string()),
                Notification::Complete
            ]
        );
    }

    #[test]
    fn test_sync_inner_streams_drain_in_outer_order() {
        let rec = Recorder::new();
        Observable::from_iter(vec![1, 2, 3])
            .flat_map(|v| Observable::from_iter(vec![v, v * 10, v * 100]))
            .subscribe(Arc::clone(&rec));

        assert_eq!(
            rec.values(),
            vec![1, 10, 100, 2, 20, 200, 3, 30, 300]
        );
    }

    #[test]
    fn test_inner_error_does_not_stop_outer() {
        let rec = Recorder::new();
        Observable::from_iter(vec![1, 2, 3])
            .flat_map(|v| {
                if v == 2 {
                    Observable::failed(StreamError::failed("inner"))
                } else {
                    Observable::just(v)
                }
            })
            .subscribe(Arc::clone(&rec));

        assert_eq!(
            rec.events(),
            vec![
                Notification::Next(1),
                Notification::Error(StreamError::failed("inner")),
                Notification::Next(3),
                Notification::Complete
            ]
        );
    }

    #[test]
    fn test_mapper_faults_become_single_errors() {
        let rec = Recorder::new();
        Observable::from_iter(vec![1, 2])
            .flat_map(|v: i32| -> Observable<i32> {
                if v == 1 {
                    panic!("no stream");
                }
                Observable::just(v)
            })
            .subscribe(Arc::clone(&rec));

        assert_eq!(rec.values(), vec![2]);
        assert_eq!(rec.errors()[0].as_message(), "flat_map panicked: no stream");

        let rec = Recorder::new();
        Observable::from_iter(vec![1, 2])
            .try_flat_map(|v: i32| if v == 1 { Err(NoInner(v)) } else { Ok(Observable::just(v)) })
            .subscribe(Arc::clone(&rec));

        assert_eq!(rec.values(), vec![2]);
        assert_eq!(rec.errors()[0].as_label(), "operator_failed");
        assert_eq!(rec.count(NotificationKind::Complete), 1);
    }

    #[test]
    fn test_relocated_inner_streams_arrive_after_outer_completion() {
        let gate = ManualScheduler::new();
        let inner_gate = gate.clone();
        let rec = Recorder::new();

        Observable::from_iter(vec![1, 2])
            .flat_map(move |v| Observable::just(v).subscribe_on(inner_gate.clone()))
            .subscribe(Arc::clone(&rec));

        // Outer completion is not held back by pending inner work.
        assert_eq!(rec.events(), vec![Notification::Complete]);
        assert_eq!(gate.pending(), 2);

        gate.run_reversed();
        assert_eq!(
            rec.events(),
            vec![
                Notification::Complete,
                Notification::Next(2),
                Notification::Next(1)
            ]
        );
    }

    #[test]
    fn test_inner_producer_panic_becomes_error() {
        let rec = Recorder::new();
        Observable::from_iter(vec![1, 2])
            .flat_map(|v: i32| {
                Observable::create(move |inner| {
                    if v == 1 {
                        panic!("inner blew up");
                    }
                    inner.on_next(v);
                })
            })
            .subscribe(Arc::clone(&rec));

        assert_eq!(rec.values(), vec![2]);
        assert_eq!(
            rec.errors()[0].as_message(),
            "flat_map panicked: inner blew up"
        );
        assert_eq!(rec.count(NotificationKind::Complete), 1);
    }

    #[test]
    fn test_downstream_panic_unwinds_unchanged() {
        let errors = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let seen_errors = Arc::clone(&errors);
        let observer = crate::observers::ObserverFn::new(
            "exploding",
            |_v: i32| panic!("sink exploded"),
            move |_e: StreamError| {
                seen_errors.fetch_add(1, Ordering::SeqCst);
            },
            || {},
        );

        let stream = Observable::from_iter(vec![1, 2])
            .flat_map(|v| Observable::from_iter(vec![v, v * 10]));
        let payload = catch_unwind(AssertUnwindSafe(|| {
            stream.subscribe(observer);
        }))
        .expect_err("downstream panic must escape subscribe");

        assert_eq!(crate::error::panic_message(payload.as_ref()), "sink exploded");
        assert_eq!(errors.load(Ordering::SeqCst), 0);
    }
}
