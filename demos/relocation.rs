//! # Example: relocation
//!
//! Moves the producer onto the I/O pool with `subscribe_on` and delivery onto a
//! single sequential worker with `observe_on`, then disposes a second,
//! never-ending subscription from the main thread.
//!
//! ## Run
//! Requires the `logging` feature to export [`LogObserver`].
//! ```bash
//! RUST_LOG=pushflow=trace cargo run --example relocation --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use pushflow::{LogObserver, Observable, Observer, SchedulerConfig, StreamError, schedulers};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = SchedulerConfig::default();
    let io = schedulers::io(&cfg)?;
    let single = schedulers::single(&cfg)?;

    let words = Observable::create(|obs| {
        for w in ["alpha", "beta", "gamma"] {
            println!("[producer] {w} on {:?}", thread::current().name());
            obs.on_next(w.to_string());
        }
        obs.on_error(StreamError::failed("out of words"));
    });

    words
        .map(|w| w.to_uppercase())
        .subscribe_on(io.clone())
        .observe_on(single.clone())
        .subscribe(LogObserver::new("words"));

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    let ticks = Observable::create(move |obs| {
        let mut n = 0_u32;
        while flag.load(Ordering::SeqCst) {
            obs.on_next(n);
            n += 1;
            thread::sleep(Duration::from_millis(20));
        }
        obs.on_complete();
    });

    let handle = ticks.subscribe_on(io).subscribe(LogObserver::new("ticks"));
    thread::sleep(Duration::from_millis(100));
    handle.dispose();
    println!("[main] disposed ticks: {}", handle.is_disposed());

    // Disposal only silences the observer; the producer stops on its own flag.
    thread::sleep(Duration::from_millis(100));
    running.store(false, Ordering::SeqCst);
    thread::sleep(Duration::from_millis(50));
    Ok(())
}
