//! # Example: pipeline
//!
//! Builds a synchronous chain of operators and subscribes twice to show that
//! each subscription re-runs the producer.
//!
//! ## Flow
//! ```text
//! from_iter(1..=10)
//!   ├─► filter(odd)
//!   ├─► map(v * v)
//!   ├─► flat_map(v ─► [v, -v])
//!   ├─► limit(6)
//!   └─► subscribe(ObserverFn) ──► printed on the calling thread
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example pipeline
//! ```

use pushflow::{Observable, ObserverFn, StreamError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let squares = Observable::from_iter(1..=10)
        .filter(|v| v % 2 == 1)
        .map(|v| v * v)
        .flat_map(|v| Observable::from_iter(vec![v, -v]))
        .limit(6);

    for run in 1..=2 {
        squares.subscribe(ObserverFn::new(
            "printer",
            move |v: i32| println!("[run {run}] next {v}"),
            move |e: StreamError| println!("[run {run}] error {e}"),
            move || println!("[run {run}] complete"),
        ));
    }

    // A faulting mapper turns one value into an error; the stream goes on.
    Observable::from_iter(vec![4, 0, 2])
        .map(|v: i32| 8 / v)
        .subscribe(ObserverFn::new(
            "faults",
            |v: i32| println!("[faults] next {v}"),
            |e: StreamError| println!("[faults] error {} ({})", e.as_message(), e.as_label()),
            || println!("[faults] complete"),
        ));
}
