//! Error types used by observables and schedulers.
//!
//! This module defines two main error enums:
//!
//! - [`StreamError`] — errors delivered downstream through [`Observer::on_error`](crate::Observer::on_error).
//! - [`SchedulerError`] — errors raised while constructing a scheduler strategy.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.

use std::any::Any;
use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// # Errors carried by a stream.
///
/// Producers raise them explicitly (`observer.on_error(StreamError::failed(..))`);
/// operators raise them when a user-supplied function faults. The type is `Clone`
/// so it can be fanned out to several inner subscriptions and moved into scheduled jobs.
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum StreamError {
    /// Failure raised by a producer.
    #[error("stream failed: {message}")]
    Failed {
        /// Human-readable failure message.
        message: String,
    },

    /// A fallible operator function (`try_map`, `try_filter`, `try_flat_map`) returned `Err`.
    #[error("operator `{operator}` failed: {source}")]
    Operator {
        /// Operator that observed the failure.
        operator: &'static str,
        /// The error returned by the user function.
        #[source]
        source: Arc<dyn StdError + Send + Sync>,
    },

    /// A user function passed to an operator panicked.
    #[error("operator `{operator}` panicked: {message}")]
    Panicked {
        /// Operator whose function panicked.
        operator: &'static str,
        /// Panic payload rendered as text.
        message: String,
    },

    /// Any other error, wrapped as is.
    #[error(transparent)]
    Other(Arc<dyn StdError + Send + Sync>),
}

impl StreamError {
    /// Builds a [`StreamError::Failed`] from a message.
    ///
    /// # Example
    /// ```
    /// use pushflow::StreamError;
    ///
    /// let err = StreamError::failed("disk gone");
    /// assert_eq!(err.to_string(), "stream failed: disk gone");
    /// ```
    pub fn failed(message: impl Into<String>) -> Self {
        StreamError::Failed {
            message: message.into(),
        }
    }

    /// Wraps an arbitrary error as [`StreamError::Other`].
    pub fn other<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        StreamError::Other(Arc::new(error))
    }

    pub(crate) fn operator<E>(operator: &'static str, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        StreamError::Operator {
            operator,
            source: Arc::new(error),
        }
    }

    pub(crate) fn panicked(operator: &'static str, payload: &(dyn Any + Send)) -> Self {
        StreamError::Panicked {
            operator,
            message: panic_message(payload),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use pushflow::StreamError;
    ///
    /// assert_eq!(StreamError::failed("x").as_label(), "stream_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StreamError::Failed { .. } => "stream_failed",
            StreamError::Operator { .. } => "operator_failed",
            StreamError::Panicked { .. } => "operator_panicked",
            StreamError::Other(_) => "stream_other",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StreamError::Failed { message } => format!("failed: {message}"),
            StreamError::Operator { operator, source } => format!("{operator}: {source}"),
            StreamError::Panicked { operator, message } => {
                format!("{operator} panicked: {message}")
            }
            StreamError::Other(e) => format!("error: {e}"),
        }
    }
}

/// Renders a panic payload caught by `catch_unwind` as text.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// # Errors produced while starting a scheduler.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// The worker runtime backing a strategy could not be built.
    #[error("failed to start `{scheduler}` scheduler: {source}")]
    Build {
        /// Strategy name.
        scheduler: &'static str,
        /// Underlying I/O error from the runtime builder.
        #[source]
        source: std::io::Error,
    },
}

impl SchedulerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SchedulerError::Build { .. } => "scheduler_build",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SchedulerError::Build { scheduler, source } => {
                format!("scheduler {scheduler} failed to start: {source}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("bad input {0}")]
    struct BadInput(i32);

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(StreamError::failed("x").as_label(), "stream_failed");
        assert_eq!(
            StreamError::operator("try_map", BadInput(1)).as_label(),
            "operator_failed"
        );
        assert_eq!(StreamError::other(BadInput(2)).as_label(), "stream_other");
    }

    #[test]
    fn test_operator_error_keeps_source() {
        let err = StreamError::operator("try_map", BadInput(7));
        assert_eq!(err.to_string(), "operator `try_map` failed: bad input 7");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("bad input 7"));
    }

    #[test]
    fn test_panic_payload_rendering() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("boom"));
        let borrowed: Box<dyn Any + Send> = Box::new("bang");
        let opaque: Box<dyn Any + Send> = Box::new(42_u8);

        assert_eq!(
            StreamError::panicked("map", owned.as_ref()).as_message(),
            "map panicked: boom"
        );
        assert_eq!(
            StreamError::panicked("filter", borrowed.as_ref()).as_message(),
            "filter panicked: bang"
        );
        assert_eq!(
            StreamError::panicked("flat_map", opaque.as_ref()).as_message(),
            "flat_map panicked: unknown panic payload"
        );
    }
}
