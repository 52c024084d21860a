//! # LogObserver — simple event printer
//!
//! A minimal observer that prints every call to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [next] observer="numbers" value=1
//! [next] observer="numbers" value=2
//! [error] observer="numbers" label=operator_panicked err="map panicked: boom"
//! [complete] observer="numbers"
//! ```

use std::fmt::Debug;

use crate::error::StreamError;
use crate::observers::Observer;

/// Stdout writer observer.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    label: &'static str,
}

impl LogObserver {
    /// Construct a new [`LogObserver`] tagged with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("log")
    }
}

impl<T> Observer<T> for LogObserver
where
    T: Debug + 'static,
{
    fn on_next(&self, value: T) {
        println!("[next] observer={:?} value={:?}", self.label, value);
    }

    fn on_error(&self, error: StreamError) {
        println!(
            "[error] observer={:?} label={} err={:?}",
            self.label,
            error.as_label(),
            error.as_message()
        );
    }

    fn on_complete(&self) {
        println!("[complete] observer={:?}", self.label);
    }

    fn name(&self) -> &'static str {
        "LogObserver"
    }
}
