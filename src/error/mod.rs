//! Error types for stream construction and lifecycle.
//!
//! This module provides:
//! - `ErrorKind`: Classifies an error as validation, construction, or lifecycle
//! - `StreamOrigin`: Which stream variant an error belongs to
//! - `StreamError`: The error value returned by constructors and `close()`
//!
//! Every failure in this layer is surfaced synchronously as a returned
//! `StreamError`; nothing is retried or logged here. Construction errors
//! carry the engine's last-error text so callers get a human-readable
//! reason without touching the engine boundary themselves.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which stream variant an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOrigin {
    /// A [`FileStream`](crate::FileStream).
    File,
    /// A [`BufferStream`](crate::BufferStream).
    Buffer,
}

impl fmt::Display for StreamOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamOrigin::File => write!(f, "FileStream"),
            StreamOrigin::Buffer => write!(f, "BufferStream"),
        }
    }
}

/// Coarse classification of a [`StreamError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before any engine resource was allocated.
    Validation,
    /// The engine reported failure while opening the source.
    Construction,
    /// An operation was invoked in the wrong state.
    Lifecycle,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "Validation"),
            ErrorKind::Construction => write!(f, "Construction"),
            ErrorKind::Lifecycle => write!(f, "Lifecycle"),
        }
    }
}

/// Error returned by stream constructors and `close()`.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The path given to `FileStream::new` names nothing on disk.
    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An empty buffer was given to `BufferStream::new`.
    #[error("nil buffer given")]
    NilBuffer,

    /// The engine set the failure flag while opening the source. No stream
    /// instance is returned; the partial engine allocation has already been
    /// released.
    #[error("unable to create {origin}: {reason}")]
    Construction {
        /// Which variant failed to construct.
        origin: StreamOrigin,
        /// The engine's last-error text.
        reason: String,
    },

    /// `close()` was called on a stream that was already closed.
    #[error("stream has been already closed")]
    AlreadyClosed,
}

impl StreamError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StreamError::FileNotFound(_) | StreamError::NilBuffer => ErrorKind::Validation,
            StreamError::Construction { .. } => ErrorKind::Construction,
            StreamError::AlreadyClosed => ErrorKind::Lifecycle,
        }
    }
}
