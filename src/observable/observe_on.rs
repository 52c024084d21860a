//! `observe_on`: deliver every event through a scheduler.
//!
//! ```text
//! upstream ──► ObserveOnObserver ──► scheduler.execute(job) ──► downstream
//!               on_next(v)           job: Next(v).deliver()
//!               on_error(e)          job: Error(e).deliver()
//!               on_complete()        job: Complete.deliver()
//! ```
//!
//! The upstream subscription still happens on the calling thread. Events reach
//! the downstream observer in the order the scheduler runs the jobs: a
//! [`SingleScheduler`](crate::SingleScheduler) keeps upstream order, pooled
//! schedulers do not.

use std::sync::Arc;

use crate::error::StreamError;
use crate::notification::Notification;
use crate::observable::Observable;
use crate::observers::{Observer, ObserverRef};
use crate::schedulers::{Scheduler, SchedulerRef};

struct ObserveOnObserver<T> {
    downstream: ObserverRef<T>,
    scheduler: SchedulerRef,
}

impl<T: Send + 'static> ObserveOnObserver<T> {
    fn schedule(&self, notification: Notification<T>) {
        let downstream = Arc::clone(&self.downstream);
        self.scheduler
            .execute(Box::new(move || notification.deliver(&*downstream)));
    }
}

impl<T: Send + 'static> Observer<T> for ObserveOnObserver<T> {
    fn on_next(&self, value: T) {
        self.schedule(Notification::Next(value));
    }

    fn on_error(&self, error: StreamError) {
        self.schedule(Notification::Error(error));
    }

    fn on_complete(&self) {
        self.schedule(Notification::Complete);
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Delivers every event to the downstream observer from a job on `scheduler`.
    pub fn observe_on(&self, scheduler: SchedulerRef) -> Observable<T> {
        let upstream = self.clone();
        Observable::create(move |downstream: ObserverRef<T>| {
            tracing::trace!(
                scheduler = scheduler.name(),
                observer = downstream.name(),
                "relocating delivery"
            );
            upstream.subscribe(ObserveOnObserver {
                downstream,
                scheduler: Arc::clone(&scheduler),
            });
        })
    }
}
