//! # pushflow
//!
//! **pushflow** is a small library of lazy, push-based event streams.
//!
//! An [`Observable`] describes how to produce a sequence of events; nothing runs
//! until [`Observable::subscribe`] is called. Operators compose new observables
//! without touching the ones they derive from, every subscription re-runs the
//! producer independently, and relocation operators move subscription or
//! delivery work onto a [`Scheduler`].
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   Observable::create(producer)          (inert description)
//!        │ .map(f) .filter(p) .limit(n) .flat_map(g)
//!        │ .subscribe_on(sched) .observe_on(sched)
//!        ▼
//!   subscribe(observer) ──► Disposable (per-subscription flag)
//!        │
//!        ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │ producer(SafeObserver)                                            │
//! │   on_next / on_error / on_complete pushed synchronously           │
//! │   through each operator's adapter, checked against the flag       │
//! └──────┬─────────────────────────────────────────────────┬──────────┘
//!        │ unrelocated: calling thread                     │ relocated
//!        ▼                                                 ▼
//!   user Observer                                   Scheduler::execute(job)
//!                                                   ├─ ComputationScheduler
//!                                                   ├─ IoScheduler
//!                                                   └─ SingleScheduler
//! ```
//!
//! ### Subscription lifecycle
//! ```text
//! subscribe(observer)
//!   ├─► flag = false, Disposable(flag)
//!   ├─► producer(guard(observer, flag))
//!   │       ├─ on_next(v)   ─► forwarded while flag == false
//!   │       ├─ on_error(e)  ─► forwarded while flag == false
//!   │       └─ on_complete  ─► forwarded while flag == false
//!   └─► return Disposable
//!
//! dispose()  ─► flag = true (idempotent, any thread)
//!            ─► producer and scheduled jobs keep running; delivery stops
//! ```
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits                      |
//! |-----------------|----------------------------------------------------------|-----------------------------------------|
//! | **Streams**     | Lazy construction, operators, relocation.                | [`Observable`]                          |
//! | **Observers**   | Consumer contract and closure-backed observers.          | [`Observer`], [`ObserverFn`]            |
//! | **Disposal**    | Per-subscription, idempotent delivery cut-off.           | [`Disposable`]                          |
//! | **Schedulers**  | Fixed pool, cached pool, single sequential worker.       | [`Scheduler`], [`SchedulerConfig`]      |
//! | **Errors**      | Typed stream and scheduler errors.                       | [`StreamError`], [`SchedulerError`]     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogObserver`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::mpsc;
//! use pushflow::{Observable, ObserverFn, SchedulerConfig, StreamError, schedulers};
//!
//! let cfg = SchedulerConfig::default();
//! let io = schedulers::io(&cfg).expect("io scheduler");
//! let single = schedulers::single(&cfg).expect("single scheduler");
//!
//! let (tx, rx) = mpsc::channel();
//! let done = tx.clone();
//!
//! Observable::from_iter(1..=10)
//!     .filter(|v| v % 2 == 0)
//!     .map(|v| v * v)
//!     .limit(3)
//!     .subscribe_on(io)
//!     .observe_on(single)
//!     .subscribe(ObserverFn::new(
//!         "squares",
//!         move |v: i32| { let _ = tx.send(Some(v)); },
//!         |_e: StreamError| {},
//!         move || { let _ = done.send(None); },
//!     ));
//!
//! let got: Vec<i32> = rx
//!     .iter()
//!     .map_while(|v| v)
//!     .collect();
//! assert_eq!(got, vec![4, 16, 36]);
//! ```
mod disposable;
mod error;
mod notification;
mod observable;
mod observers;
pub mod schedulers;

#[cfg(test)]
mod testing;

// ---- Public re-exports ----

pub use disposable::Disposable;
pub use error::{SchedulerError, StreamError};
pub use notification::{Notification, NotificationKind};
pub use observable::Observable;
pub use observers::{Observer, ObserverFn, ObserverRef};
pub use schedulers::{
    ComputationScheduler, IoScheduler, Job, Scheduler, SchedulerConfig, SchedulerRef,
    SingleScheduler,
};

// Optional: expose a simple built-in logger observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
