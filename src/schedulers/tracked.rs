//! Runtime ownership shared by the pool strategies.
//!
//! Jobs accepted by `execute` must still run after the last handle to the
//! scheduler is dropped. [`TrackedRuntime`] therefore never drops its runtime
//! itself: a keeper thread owns it, waits for the task tracker to close and
//! drain, and only then lets the runtime go.
//!
//! ```text
//! execute(job) ──► tracker.spawn_on / spawn_blocking_on ──► worker
//! drop(handle) ──► tracker.close()
//! keeper       ──► block_on(tracker.wait())  (closed + empty)
//!              └─► drop(runtime)             (off any runtime thread)
//! ```

use std::thread;

use tokio::runtime::{Handle, Runtime};
use tokio_util::task::TaskTracker;

use crate::error::SchedulerError;
use crate::schedulers::scheduler::{Job, run_job};

pub(crate) struct TrackedRuntime {
    scheduler: &'static str,
    handle: Handle,
    tracker: TaskTracker,
}

impl TrackedRuntime {
    /// Hands `runtime` to a keeper thread named `{thread_name}-keeper`.
    pub(crate) fn start(
        scheduler: &'static str,
        runtime: Runtime,
        thread_name: &str,
    ) -> Result<Self, SchedulerError> {
        let handle = runtime.handle().clone();
        let tracker = TaskTracker::new();
        let pending = tracker.clone();

        thread::Builder::new()
            .name(format!("{thread_name}-keeper"))
            .spawn(move || {
                runtime.block_on(pending.wait());
                drop(runtime);
                tracing::debug!(scheduler, "scheduler drained and stopped");
            })
            .map_err(|source| SchedulerError::Build { scheduler, source })?;

        Ok(Self {
            scheduler,
            handle,
            tracker,
        })
    }

    /// Runs `job` as a task on the runtime's workers.
    pub(crate) fn spawn(&self, job: Job) {
        let scheduler = self.scheduler;
        self.tracker
            .spawn_on(async move { run_job(scheduler, job) }, &self.handle);
    }

    /// Runs `job` on the runtime's blocking pool.
    pub(crate) fn spawn_blocking(&self, job: Job) {
        let scheduler = self.scheduler;
        self.tracker
            .spawn_blocking_on(move || run_job(scheduler, job), &self.handle);
    }
}

impl Drop for TrackedRuntime {
    fn drop(&mut self) {
        tracing::trace!(
            scheduler = self.scheduler,
            in_flight = self.tracker.len(),
            "scheduler released; draining accepted jobs"
        );
        self.tracker.close();
    }
}
