//! # Schedulers
//!
//! The [`Scheduler`] trait and the three built-in strategies:
//!
//! | Strategy                  | Workers                         | Ordering across jobs |
//! |---------------------------|---------------------------------|----------------------|
//! | [`ComputationScheduler`]  | fixed, hardware parallelism     | none                 |
//! | [`IoScheduler`]           | cached, unbounded, recycled     | none                 |
//! | [`SingleScheduler`]       | exactly one                     | strict FIFO          |
//!
//! `observe_on` delivers events in the order the scheduler runs its jobs, so
//! only [`SingleScheduler`] preserves the upstream event order.
//!
//! ## Example
//! ```rust
//! use pushflow::{Scheduler, SchedulerConfig, schedulers};
//!
//! let cfg = SchedulerConfig::default();
//! let single = schedulers::single(&cfg).expect("scheduler");
//! assert_eq!(single.name(), "single");
//! ```

mod computation;
mod config;
mod io;
mod scheduler;
mod single;
mod tracked;

use std::sync::Arc;

use crate::error::SchedulerError;

pub use computation::ComputationScheduler;
pub use config::SchedulerConfig;
pub use io::IoScheduler;
pub use scheduler::{Job, Scheduler, SchedulerRef};
pub use single::SingleScheduler;

/// Starts a [`ComputationScheduler`] and returns it as a shared handle.
pub fn computation(cfg: &SchedulerConfig) -> Result<SchedulerRef, SchedulerError> {
    Ok(Arc::new(ComputationScheduler::new(cfg)?))
}

/// Starts an [`IoScheduler`] and returns it as a shared handle.
pub fn io(cfg: &SchedulerConfig) -> Result<SchedulerRef, SchedulerError> {
    Ok(Arc::new(IoScheduler::new(cfg)?))
}

/// Starts a [`SingleScheduler`] and returns it as a shared handle.
pub fn single(cfg: &SchedulerConfig) -> Result<SchedulerRef, SchedulerError> {
    Ok(Arc::new(SingleScheduler::new(cfg)?))
}
