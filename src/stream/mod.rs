//! Stream wrappers over engine-allocated handles.
//!
//! This module provides:
//! - `Streamer`: Trait for stream sources the extraction engine can consume
//! - `FileStream`: Stream backed by an on-disk file
//! - `BufferStream`: Zero-copy stream over a caller-supplied buffer
//!
//! Both variants are peers implementing the same capability set; there is
//! no shared state between them beyond the trait.

mod buffer;
mod file;

pub use buffer::BufferStream;
pub use file::FileStream;

use std::fmt::Debug;

use crate::engine::StreamHandle;
use crate::error::StreamError;

/// Trait for stream sources consumable by the extraction engine.
///
/// Implementors wrap an engine-allocated [`StreamHandle`] and manage its
/// lifecycle: the handle exists from successful construction until the one
/// permitted `close()` (or drop), and the wrapper releases it exactly once.
pub trait Streamer: Debug {
    /// Returns the raw handle for consumption by the extraction engine.
    ///
    /// Callable any number of times while the stream is open. After
    /// `close()` the stream no longer has a handle and this returns null;
    /// callers must not hand a closed stream to the engine.
    fn stream(&self) -> *mut StreamHandle;

    /// Reports whether the stream is usable.
    ///
    /// Returns `true` if the engine's failure flag is clear, `false` if it
    /// is set. Pure read, safe to call at any point after construction.
    /// Constructors call this before returning, so a stream a caller holds
    /// has already passed at least one check.
    fn check(&self) -> bool;

    /// Closes the stream, releasing the engine-side handle.
    ///
    /// Not idempotent: closing an already-closed stream fails with
    /// [`StreamError::AlreadyClosed`]. A `BufferStream`'s backing buffer is
    /// caller-owned and is never freed here.
    fn close(&mut self) -> Result<(), StreamError>;
}
