//! # Scheduler configuration.
//!
//! Provides [`SchedulerConfig`], the settings every built-in strategy is
//! constructed from.
//!
//! ## Sentinel values
//! - `computation_threads = 0` → one worker per available hardware thread
//! - `io_max_threads = 0` → unbounded (no cap on the cached pool)

use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

/// Stand-in for "unbounded" when a runtime builder insists on a number.
const UNBOUNDED_IO_THREADS: usize = usize::MAX / 2;

/// Settings for the built-in scheduler strategies.
///
/// ## Field semantics
/// - `computation_threads`: fixed pool size (`0` = hardware parallelism)
/// - `io_max_threads`: cached pool ceiling (`0` = unbounded)
/// - `io_keep_alive`: idle time after which a cached worker is recycled
/// - `thread_name_prefix`: prefix for worker thread names
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// Number of workers in the computation pool.
    ///
    /// - `0` = `std::thread::available_parallelism()` (falls back to 1)
    /// - `n > 0` = exactly `n` workers
    pub computation_threads: usize,

    /// Maximum number of live workers in the I/O pool.
    ///
    /// - `0` = unbounded (one worker per outstanding job)
    /// - `n > 0` = jobs beyond `n` queue until a worker frees up
    pub io_max_threads: usize,

    /// How long an idle I/O worker lingers before it exits.
    pub io_keep_alive: Duration,

    /// Worker threads are named `{prefix}-{strategy}`.
    pub thread_name_prefix: String,
}

impl SchedulerConfig {
    /// Returns the computation pool size with the `0` sentinel resolved.
    #[inline]
    pub fn computation_threads_resolved(&self) -> usize {
        if self.computation_threads == 0 {
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        } else {
            self.computation_threads
        }
    }

    /// Returns the I/O pool ceiling as an `Option`.
    ///
    /// - `None` → unbounded
    /// - `Some(n)` → at most `n` live workers
    #[inline]
    pub fn io_thread_limit(&self) -> Option<usize> {
        if self.io_max_threads == 0 {
            None
        } else {
            Some(self.io_max_threads)
        }
    }

    pub(crate) fn io_threads_for_runtime(&self) -> usize {
        self.io_thread_limit().unwrap_or(UNBOUNDED_IO_THREADS)
    }

    /// Thread name for the given strategy.
    pub fn thread_name(&self, strategy: &str) -> String {
        format!("{}-{}", self.thread_name_prefix, strategy)
    }
}

impl Default for SchedulerConfig {
    /// Default configuration:
    ///
    /// - `computation_threads = 0` (hardware parallelism)
    /// - `io_max_threads = 0` (unbounded)
    /// - `io_keep_alive = 60s` (idle cached workers are recycled after a minute)
    /// - `thread_name_prefix = "pushflow"`
    fn default() -> Self {
        Self {
            computation_threads: 0,
            io_max_threads: 0,
            io_keep_alive: Duration::from_secs(60),
            thread_name_prefix: "pushflow".to_string(),
        }
    }
}
