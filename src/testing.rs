//! Test doubles shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, ThreadId};
use std::time::Duration;

use crate::error::StreamError;
use crate::notification::{Notification, NotificationKind};
use crate::observers::Observer;
use crate::schedulers::{Job, Scheduler};

/// Records every call it receives, in order, with the calling thread.
pub(crate) struct Recorder<T> {
    log: Mutex<Vec<(Notification<T>, ThreadId)>>,
    changed: Condvar,
}

impl<T: Clone> Recorder<T> {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            log: Mutex::new(Vec::new()),
            changed: Condvar::new(),
        })
    }

    fn push(&self, n: Notification<T>) {
        self.log.lock().unwrap().push((n, thread::current().id()));
        self.changed.notify_all();
    }

    pub(crate) fn events(&self) -> Vec<Notification<T>> {
        self.log.lock().unwrap().iter().map(|(n, _)| n.clone()).collect()
    }

    pub(crate) fn values(&self) -> Vec<T> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(n, _)| match n {
                Notification::Next(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn errors(&self) -> Vec<StreamError> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(n, _)| match n {
                Notification::Error(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn count(&self, kind: NotificationKind) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(n, _)| n.kind() == kind)
            .count()
    }

    pub(crate) fn threads(&self) -> Vec<ThreadId> {
        self.log.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    /// Blocks until at least `n` calls were recorded; false on timeout.
    pub(crate) fn wait_for(&self, n: usize, timeout: Duration) -> bool {
        let guard = self.log.lock().unwrap();
        let (guard, _) = self
            .changed
            .wait_timeout_while(guard, timeout, |log| log.len() < n)
            .unwrap();
        guard.len() >= n
    }
}

impl<T: Clone + Send + 'static> Observer<T> for Recorder<T> {
    fn on_next(&self, value: T) {
        self.push(Notification::Next(value));
    }

    fn on_error(&self, error: StreamError) {
        self.push(Notification::Error(error));
    }

    fn on_complete(&self) {
        self.push(Notification::Complete);
    }
}

/// Runs each job on a fresh thread and counts submissions.
#[derive(Default)]
pub(crate) struct ThreadScheduler {
    executed: AtomicUsize,
}

impl ThreadScheduler {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn executed(&self) -> usize {
        self.executed.load(Ordering::SeqCst)
    }
}

impl Scheduler for ThreadScheduler {
    fn execute(&self, job: Job) {
        self.executed.fetch_add(1, Ordering::SeqCst);
        thread::spawn(job);
    }
}

/// Parks jobs until [`run_all`](Self::run_all) drains them on the calling thread.
#[derive(Default)]
pub(crate) struct ManualScheduler {
    queue: Mutex<Vec<Job>>,
    executed: AtomicUsize,
}

impl ManualScheduler {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn executed(&self) -> usize {
        self.executed.load(Ordering::SeqCst)
    }

    pub(crate) fn pending(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    /// Runs parked jobs in submission order, including jobs they submit.
    pub(crate) fn run_all(&self) {
        loop {
            let batch: Vec<Job> = std::mem::take(&mut *self.queue.lock().unwrap());
            if batch.is_empty() {
                return;
            }
            for job in batch {
                job();
            }
        }
    }

    /// Runs parked jobs newest first.
    pub(crate) fn run_reversed(&self) {
        let batch: Vec<Job> = std::mem::take(&mut *self.queue.lock().unwrap());
        for job in batch.into_iter().rev() {
            job();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn execute(&self, job: Job) {
        self.executed.fetch_add(1, Ordering::SeqCst);
        self.queue.lock().unwrap().push(job);
    }
}
