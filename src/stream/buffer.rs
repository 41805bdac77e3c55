//! Buffer-backed stream implementation.

use std::ptr::{self, NonNull};

use crate::engine::{self, BufferStreamHandle, STREAM_FAILED, StreamHandle};
use crate::error::{StreamError, StreamOrigin};

use super::Streamer;

/// A zero-copy stream over a caller-supplied byte buffer.
///
/// The buffer is borrowed, never copied: the engine reads the caller's
/// memory directly, and the `'a` lifetime keeps the buffer alive for as
/// long as the stream exists. The scanning convention requires the buffer
/// to end with a `\0` byte. Closing the stream releases only the
/// engine-side handle; the buffer stays with the caller.
#[derive(Debug)]
pub struct BufferStream<'a> {
    buffer: &'a [u8],
    handle: Option<NonNull<BufferStreamHandle>>,
}

impl<'a> BufferStream<'a> {
    /// Wraps `buffer` as a stream source.
    ///
    /// Fails with [`StreamError::NilBuffer`] for an empty buffer (checked
    /// before any engine allocation), or with
    /// [`StreamError::Construction`] if the engine rejects the memory, a
    /// missing `\0` terminator being the usual cause. On the construction
    /// failure path the partial engine allocation is released before the
    /// error is returned.
    pub fn new(buffer: &'a [u8]) -> Result<Self, StreamError> {
        if buffer.is_empty() {
            return Err(StreamError::NilBuffer);
        }
        // Sound: the slice guarantees `len` readable bytes at `as_ptr()`.
        let raw = unsafe { engine::open_buffer_stream(buffer.as_ptr(), buffer.len()) };
        let mut stream = Self {
            buffer,
            handle: NonNull::new(raw),
        };
        if !stream.check() {
            let reason =
                engine::last_error().unwrap_or_else(|| "engine reported failure".to_string());
            stream.release();
            return Err(StreamError::Construction {
                origin: StreamOrigin::Buffer,
                reason,
            });
        }
        Ok(stream)
    }

    /// The caller's backing buffer, terminator included.
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            unsafe { engine::destroy_buffer_stream(handle.as_ptr()) };
        }
    }
}

impl Streamer for BufferStream<'_> {
    fn stream(&self) -> *mut StreamHandle {
        match self.handle {
            Some(handle) => unsafe { &raw mut (*handle.as_ptr()).stream },
            None => ptr::null_mut(),
        }
    }

    fn check(&self) -> bool {
        match self.handle {
            Some(handle) => unsafe { (*handle.as_ptr()).stream.state_flags & STREAM_FAILED == 0 },
            None => false,
        }
    }

    fn close(&mut self) -> Result<(), StreamError> {
        if self.handle.is_none() {
            return Err(StreamError::AlreadyClosed);
        }
        self.release();
        Ok(())
    }
}

impl Drop for BufferStream<'_> {
    fn drop(&mut self) {
        self.release();
    }
}
