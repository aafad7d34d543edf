//! Caller-facing errors for id-addressed queue operations.

use core::fmt;

/// Why an id-addressed operation left the queue unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The id does not correspond to any currently queued event: it was
    /// already popped, removed, or never issued by this queue.
    NotFound,
    /// The event was found, but the caller's filter declined the
    /// operation. The event remains queued, unmodified.
    Rejected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "no queued event with that id"),
            ErrorKind::Rejected => write!(f, "filter declined the operation"),
        }
    }
}

impl std::error::Error for ErrorKind {}
