//! `subscribe_on`: run the subscription itself on a scheduler.

use crate::observable::Observable;
use crate::observers::{Observer, ObserverRef};
use crate::schedulers::{Scheduler, SchedulerRef};

impl<T: Send + 'static> Observable<T> {
    /// Moves the upstream subscription onto `scheduler`.
    ///
    /// `subscribe` submits exactly one job and returns without waiting; the
    /// producer, and every event it emits synchronously, runs inside that job.
    pub fn subscribe_on(&self, scheduler: SchedulerRef) -> Observable<T> {
        let upstream = self.clone();
        Observable::create(move |downstream: ObserverRef<T>| {
            let upstream = upstream.clone();
            tracing::trace!(
                scheduler = scheduler.name(),
                observer = downstream.name(),
                "relocating subscription"
            );
            scheduler.execute(Box::new(move || {
                upstream.subscribe(downstream);
            }));
        })
    }
}
