//! # minestream
//!
//! A uniform stream abstraction layer for miner-based text extraction engines.
//!
//! ## Overview
//!
//! Extraction engines consume their input through an opaque stream handle: a
//! small C-layout record carrying a cursor and state flags, allocated on the
//! native heap so miners can advance it without going back through the host.
//! minestream wraps that handle in safe, host-managed stream types:
//!
//! - **[`FileStream`]**: a stream backed by an on-disk file
//! - **[`BufferStream`]**: a zero-copy stream over a caller-supplied,
//!   null-terminated byte buffer
//! - **[`Streamer`]**: the capability contract both variants satisfy —
//!   expose the raw handle, report validity, close exactly once
//!
//! Construction is all-or-nothing: a constructor either returns a stream
//! whose [`check`](Streamer::check) already passed, or a typed
//! [`StreamError`] and no instance. Closing is explicit and not idempotent:
//! a second `close()` fails with a lifecycle error. Dropping an open stream
//! still releases the engine-side handle, so resources are reclaimed on
//! every exit path.
//!
//! ## Quick Start
//!
//! ```rust
//! use minestream::{BufferStream, Streamer};
//!
//! fn main() -> Result<(), minestream::StreamError> {
//!     let data = b"Franz Kafka was born in Prague.\0".to_vec();
//!
//!     let mut stream = BufferStream::new(&data)?;
//!     assert!(stream.check());
//!
//!     // Hand `stream.stream()` to the extraction engine here.
//!
//!     stream.close()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Ownership & threading model
//!
//! The handle is engine-allocated memory referenced from the host-side
//! wrapper; the wrapper owns it exclusively and releases it exactly once.
//! A [`BufferStream`] never copies the caller's buffer. It borrows it for
//! the lifetime of the stream, so the borrow checker enforces the "keep the
//! buffer alive while the engine reads it" contract. Stream instances are
//! single-owner, single-thread values (`!Send`/`!Sync`); callers that need
//! cross-thread access must serialize it themselves.

// Core modules
pub mod engine;
pub mod error;
pub mod stream;

// Re-exports for convenience
pub use engine::{STREAM_FAILED, StreamHandle};
pub use error::{ErrorKind, StreamError, StreamOrigin};
pub use stream::{BufferStream, FileStream, Streamer};

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
