//! File-backed stream implementation.

use std::path::{Path, PathBuf};
use std::ptr::{self, NonNull};

use crate::engine::{self, FileStreamHandle, STREAM_FAILED, StreamHandle};
use crate::error::{StreamError, StreamOrigin};

use super::Streamer;

/// A stream backed by an on-disk file.
///
/// The constructor loads the file through the engine and validates the
/// result, so a `FileStream` in the caller's hands is always usable until
/// closed. The handle invariant: the internal handle is present exactly
/// while the stream has not been closed.
#[derive(Debug)]
pub struct FileStream {
    path: PathBuf,
    handle: Option<NonNull<FileStreamHandle>>,
}

impl FileStream {
    /// Opens `path` as a stream source.
    ///
    /// Fails with [`StreamError::FileNotFound`] if the path names nothing
    /// on disk (checked before any engine allocation), or with
    /// [`StreamError::Construction`] if the engine sets the failure flag
    /// while opening the file. On the construction failure path the partial
    /// engine allocation is released before the error is returned.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StreamError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StreamError::FileNotFound(path.to_path_buf()));
        }
        let raw = engine::open_file_stream(path);
        let mut stream = Self {
            path: path.to_path_buf(),
            handle: NonNull::new(raw),
        };
        if !stream.check() {
            let reason =
                engine::last_error().unwrap_or_else(|| "engine reported failure".to_string());
            stream.release();
            return Err(StreamError::Construction {
                origin: StreamOrigin::File,
                reason,
            });
        }
        Ok(stream)
    }

    /// The path this stream was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            unsafe { engine::destroy_file_stream(handle.as_ptr()) };
        }
    }
}

impl Streamer for FileStream {
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

impl Drop for FileStream {
    fn drop(&mut self) {
        self.release();
    }
}
