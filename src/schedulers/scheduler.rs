//! # Scheduler contract
//!
//! [`Scheduler`] is the single capability the observable core needs from an
//! execution context: accept a unit of work and return without waiting for it.
//!
//! ## Contract
//! - `execute` never blocks on the job itself.
//! - No lifecycle hook is part of the contract; strategies own their workers.
//! - Ordering between jobs is whatever the strategy offers (see each strategy).
//!
//! ## Example
//! ```rust
//! use pushflow::{Job, Scheduler};
//!
//! /// Runs every job on a fresh OS thread.
//! struct ThreadPerJob;
//!
//! impl Scheduler for ThreadPerJob {
//!     fn execute(&self, job: Job) {
//!         std::thread::spawn(job);
//!     }
//! }
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::error::panic_message;

/// A boxed unit of work handed to a scheduler.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Shared handle to a scheduler (`Arc<dyn Scheduler>`).
pub type SchedulerRef = Arc<dyn Scheduler>;

/// Hands work to an execution context.
pub trait Scheduler: Send + Sync + 'static {
    /// Submits `job` and returns without waiting for it to run.
    fn execute(&self, job: Job);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<S> Scheduler for Arc<S>
where
    S: Scheduler + ?Sized,
{
    fn execute(&self, job: Job) {
        (**self).execute(job)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Runs `job` on the current worker, logging instead of unwinding on panic.
pub(crate) fn run_job(scheduler: &'static str, job: Job) {
    if let Err(payload) = catch_unwind(AssertUnwindSafe(job)) {
        tracing::error!(
            scheduler,
            panic = %panic_message(payload.as_ref()),
            "scheduled job panicked"
        );
    }
}
