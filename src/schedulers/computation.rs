//! # Fixed-size pool for compute-bound work.
//!
//! [`ComputationScheduler`] owns a multi-thread runtime with one worker per
//! configured thread (hardware parallelism by default). Each job is spawned
//! onto that runtime.
//!
//! ## Ordering
//! None across jobs: two jobs submitted back to back may run concurrently or
//! in either order.
//!
//! ## Shutdown
//! Dropping the last handle stops intake only; every job already accepted
//! still runs before the workers exit.

use tokio::runtime::Builder;

use crate::error::SchedulerError;
use crate::schedulers::config::SchedulerConfig;
use crate::schedulers::scheduler::{Job, Scheduler};
use crate::schedulers::tracked::TrackedRuntime;

/// Fixed-size worker pool.
pub struct ComputationScheduler {
    runtime: TrackedRuntime,
    threads: usize,
}

impl ComputationScheduler {
    /// Strategy name used in logs and thread names.
    pub const NAME: &'static str = "computation";

    /// Starts the pool.
    pub fn new(cfg: &SchedulerConfig) -> Result<Self, SchedulerError> {
        let threads = cfg.computation_threads_resolved();
        let thread_name = cfg.thread_name(Self::NAME);
        let runtime = Builder::new_multi_thread()
            .worker_threads(threads)
            .thread_name(thread_name.clone())
            .build()
            .map_err(|source| SchedulerError::Build {
                scheduler: Self::NAME,
                source,
            })?;
        let runtime = TrackedRuntime::start(Self::NAME, runtime, &thread_name)?;

        tracing::debug!(scheduler = Self::NAME, threads, "scheduler started");
        Ok(Self { runtime, threads })
    }

    /// Number of workers in the pool.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl Scheduler for ComputationScheduler {
    fn execute(&self, job: Job) {
        self.runtime.spawn(job);
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
