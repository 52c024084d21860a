//! # Owned observer calls.
//!
//! A [`Notification`] captures one call on an [`Observer`]: a value, an error or a
//! completion. It is what `observe_on` moves into a scheduled job, and what tests
//! record to assert on exact delivery sequences.
//!
//! ## Example
//! ```rust
//! use pushflow::{Notification, NotificationKind};
//!
//! let n: Notification<i32> = Notification::Next(5);
//! assert_eq!(n.kind(), NotificationKind::Next);
//! assert!(!n.is_terminal());
//! assert!(Notification::<i32>::Complete.is_terminal());
//! ```

use crate::error::StreamError;
use crate::observers::Observer;

/// Classification of observer calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// `on_next`
    Next,
    /// `on_error` (terminal)
    Error,
    /// `on_complete` (terminal)
    Complete,
}

/// One observer call with its payload.
#[derive(Debug, Clone)]
pub enum Notification<T> {
    /// A value.
    Next(T),
    /// A terminal error.
    Error(StreamError),
    /// Terminal completion.
    Complete,
}

impl<T> Notification<T> {
    /// Returns the kind of this notification.
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::Next(_) => NotificationKind::Next,
            Notification::Error(_) => NotificationKind::Error,
            Notification::Complete => NotificationKind::Complete,
        }
    }

    /// True for `Error` and `Complete`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Notification::Next(_))
    }

    /// Replays this notification onto `observer`.
    pub fn deliver<O>(self, observer: &O)
    where
        O: Observer<T> + ?Sized,
    {
        match self {
            Notification::Next(v) => observer.on_next(v),
            Notification::Error(e) => observer.on_error(e),
            Notification::Complete => observer.on_complete(),
        }
    }
}

impl<T: PartialEq> PartialEq for Notification<T> {
    /// Errors compare by label and message; sources are not compared structurally.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Notification::Next(a), Notification::Next(b)) => a == b,
            (Notification::Error(a), Notification::Error(b)) => {
                a.as_label() == b.as_label() && a.as_message() == b.as_message()
            }
            (Notification::Complete, Notification::Complete) => true,
            _ => false,
        }
    }
}
