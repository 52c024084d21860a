//! # Cached pool for I/O-bound work.
//!
//! [`IoScheduler`] hands every job to the blocking pool of a runtime it owns.
//! The blocking pool is a cached pool: a worker is started when no idle one is
//! available, and idle workers exit after `io_keep_alive`. With
//! `io_max_threads = 0` the pool is unbounded, so a job never waits for
//! another job to finish.
//!
//! The runtime is current-thread: no async worker is started, only the
//! blocking pool ever runs jobs.
//!
//! ## Ordering
//! None across jobs.
//!
//! ## Shutdown
//! Dropping the last handle stops intake only; every job already accepted
//! still runs before the pool exits.

use tokio::runtime::Builder;

use crate::error::SchedulerError;
use crate::schedulers::config::SchedulerConfig;
use crate::schedulers::scheduler::{Job, Scheduler};
use crate::schedulers::tracked::TrackedRuntime;

/// Unbounded, recycling worker pool.
pub struct IoScheduler {
    runtime: TrackedRuntime,
}

impl IoScheduler {
    /// Strategy name used in logs and thread names.
    pub const NAME: &'static str = "io";

    /// Starts the pool. Workers are created lazily on first use.
    pub fn new(cfg: &SchedulerConfig) -> Result<Self, SchedulerError> {
        let thread_name = cfg.thread_name(Self::NAME);
        let runtime = Builder::new_current_thread()
            .max_blocking_threads(cfg.io_threads_for_runtime())
            .thread_keep_alive(cfg.io_keep_alive)
            .thread_name(thread_name.clone())
            .build()
            .map_err(|source| SchedulerError::Build {
                scheduler: Self::NAME,
                source,
            })?;
        let runtime = TrackedRuntime::start(Self::NAME, runtime, &thread_name)?;

        tracing::debug!(
            scheduler = Self::NAME,
            limit = ?cfg.io_thread_limit(),
            keep_alive = ?cfg.io_keep_alive,
            "scheduler started"
        );
        Ok(Self { runtime })
    }
}

impl Scheduler for IoScheduler {
    fn execute(&self, job: Job) {
        self.runtime.spawn_blocking(job);
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
