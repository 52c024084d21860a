//! `limit`: forward at most `n` values.
//!
//! The adapter keeps its own counter per subscription. It never unsubscribes:
//! once the cap is reached upstream keeps producing and the adapter keeps
//! counting and discarding. Terminal events always pass through.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::StreamError;
use crate::observable::Observable;
use crate::observers::{Observer, ObserverRef};

struct LimitObserver<T> {
    downstream: ObserverRef<T>,
    cap: usize,
    seen: AtomicUsize,
}

impl<T: 'static> Observer<T> for LimitObserver<T> {
    fn on_next(&self, value: T) {
        let before = self
            .seen
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                Some(n.saturating_add(1))
            })
            .unwrap_or(usize::MAX);
        if before < self.cap {
            self.downstream.on_next(value);
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
    /// Forwards the first `max_items` values and drops the rest.
    pub fn limit(&self, max_items: usize) -> Observable<T> {
        let upstream = self.clone();
        Observable::create(move |downstream: ObserverRef<T>| {
            upstream.subscribe(LimitObserver {
                downstream,
                cap: max_items,
                seen: AtomicUsize::new(0),
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{Notification, NotificationKind};
    use crate::testing::Recorder;
    use std::sync::Arc;

    fn one_to_ten(pulled: Arc<AtomicUsize>) -> Observable<i32> {
        Observable::create(move |obs| {
            for i in 1..=10 {
                pulled.fetch_add(1, Ordering::SeqCst);
                obs.on_next(i);
            }
            obs.on_complete();
        })
    }

    #[test]
    fn test_limit_caps_values() {
        let rec = Recorder::new();
        one_to_ten(Arc::default()).limit(3).subscribe(Arc::clone(&rec));

        assert_eq!(
            rec.events(),
            vec![
                Notification::Next(1),
                Notification::Next(2),
                Notification::Next(3),
                Notification::Complete
            ]
        );
    }

    #[test]
    fn test_limit_keeps_draining_upstream() {
        let pulled = Arc::new(AtomicUsize::new(0));
        one_to_ten(Arc::clone(&pulled))
            .limit(3)
            .subscribe(Recorder::new());
        assert_eq!(pulled.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_limit_zero_forwards_only_terminal() {
        let rec = Recorder::new();
        one_to_ten(Arc::default()).limit(0).subscribe(Arc::clone(&rec));
        assert_eq!(rec.events(), vec![Notification::Complete]);
    }

    #[test]
    fn test_limit_above_length_passes_everything() {
        let rec = Recorder::new();
        one_to_ten(Arc::default()).limit(50).subscribe(Arc::clone(&rec));
        assert_eq!(rec.count(NotificationKind::Next), 10);
        assert_eq!(rec.count(NotificationKind::Complete), 1);
    }

    #[test]
    fn test_counter_is_per_subscription() {
        let limited = one_to_ten(Arc::default()).limit(2);
        let (a, b) = (Recorder::new(), Recorder::new());
        limited.subscribe(Arc::clone(&a));
        limited.subscribe(Arc::clone(&b));
        assert_eq!(a.values(), vec![1, 2]);
        assert_eq!(b.values(), vec![1, 2]);
    }

    #[test]
    fn test_error_passes_even_after_cap() {
        let rec = Recorder::new();
        Observable::create(|obs| {
            obs.on_next(1);
            obs.on_next(2);
            obs.on_error(StreamError::failed("late"));
        })
        .limit(1)
        .subscribe(Arc::clone(&rec));

        assert_eq!(
            rec.events(),
            vec![
                Notification::Next(1),
                Notification::Error(StreamError::failed("late"))
            ]
        );
    }
}
