//! # Single sequential worker.
//!
//! [`SingleScheduler`] feeds an unbounded FIFO queue drained by exactly one
//! worker, so jobs run one at a time in submission order.
//!
//! ## Diagram
//! ```text
//!    execute(job)
//!        │
//!        └──► [unbounded queue] ─► worker ─► job() ─► job() ─► ...
//! ```
//!
//! ## Guarantees
//! - Strict FIFO: jobs run in the order `execute` was called.
//! - A panicking job is caught and logged; the worker keeps draining.
//! - `execute` never blocks (the queue is unbounded).
//! - Dropping the last handle closes the queue; the worker runs everything
//!   already queued, then exits.

use std::thread;

use tokio::sync::mpsc;

use crate::error::SchedulerError;
use crate::schedulers::config::SchedulerConfig;
use crate::schedulers::scheduler::{Job, Scheduler, run_job};

/// One worker, strict submission order.
pub struct SingleScheduler {
    sender: mpsc::UnboundedSender<Job>,
}

impl SingleScheduler {
    /// Strategy name used in logs and thread names.
    pub const NAME: &'static str = "single";

    /// Starts the worker thread.
    pub fn new(cfg: &SchedulerConfig) -> Result<Self, SchedulerError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Job>();

        thread::Builder::new()
            .name(cfg.thread_name(Self::NAME))
            .spawn(move || {
                // `None` only once every sender is gone and the queue is empty.
                while let Some(job) = rx.blocking_recv() {
                    run_job(Self::NAME, job);
                }
                tracing::debug!(scheduler = Self::NAME, "scheduler drained and stopped");
            })
            .map_err(|source| SchedulerError::Build {
                scheduler: Self::NAME,
                source,
            })?;

        tracing::debug!(scheduler = Self::NAME, "scheduler started");
        Ok(Self { sender: tx })
    }
}

impl Scheduler for SingleScheduler {
    /// Enqueues `job` behind everything submitted before it.
    ///
    /// If the worker is gone, the job is dropped and a warning is logged.
    fn execute(&self, job: Job) {
        if self.sender.send(job).is_err() {
            tracing::warn!(scheduler = Self::NAME, "dropped job: worker closed");
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex, mpsc as std_mpsc};
    use std::time::Duration;

    #[test]
    fn test_jobs_run_in_submission_order() {
        let sched = SingleScheduler::new(&SchedulerConfig::default()).expect("runtime");
        let order = Arc::new(Mutex::new(Vec::new()));
        let (tx, rx) = std_mpsc::channel();

        for i in 0..100 {
            let order = Arc::clone(&order);
            sched.execute(Box::new(move || {
                order.lock().unwrap().push(i);
            }));
        }
        sched.execute(Box::new(move || {
            let _ = tx.send(());
        }));

        rx.recv_timeout(Duration::from_secs(5)).expect("drained");
        let order = order.lock().unwrap();
        assert_eq!(*order, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_worker_survives_panicking_job() {
        let sched = SingleScheduler::new(&SchedulerConfig::default()).expect("runtime");
        let (tx, rx) = std_mpsc::channel();

        sched.execute(Box::new(|| panic!("boom")));
        sched.execute(Box::new(move || {
            let _ = tx.send(42);
        }));

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(42));
    }

    #[test]
    fn test_all_jobs_share_one_thread() {
        let sched = SingleScheduler::new(&SchedulerConfig::default()).expect("runtime");
        let (tx, rx) = std_mpsc::channel();

        for _ in 0..8 {
            let tx = tx.clone();
            sched.execute(Box::new(move || {
                let _ = tx.send(std::thread::current().id());
            }));
        }

        let first = rx.recv_timeout(Duration::from_secs(5)).expect("job ran");
        for _ in 1..8 {
            assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(first));
        }
    }

    #[test]
    fn test_queued_jobs_drain_after_last_handle_dropped() {
        let sched = SingleScheduler::new(&SchedulerConfig::default()).expect("worker");
        let (tx, rx) = std_mpsc::channel();

        for i in 0..500 {
            let tx = tx.clone();
            sched.execute(Box::new(move || {
                let _ = tx.send(i);
            }));
        }
        drop(tx);
        drop(sched);

        let ran: Vec<i32> = rx.iter().collect();
        assert_eq!(ran, (0..500).collect::<Vec<_>>());
    }

    #[test]
    fn test_worker_thread_is_named() {
        let sched = SingleScheduler::new(&SchedulerConfig::default()).expect("worker");
        let (tx, rx) = std_mpsc::channel();
        sched.execute(Box::new(move || {
            let _ = tx.send(std::thread::current().name().map(str::to_owned));
        }));

        let name = rx.recv_timeout(Duration::from_secs(5)).expect("job ran");
        assert_eq!(name.as_deref(), Some("pushflow-single"));
    }
}
