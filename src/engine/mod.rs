//! Engine-side stream primitives.
//!
//! This module is the boundary the stream wrappers delegate to: the
//! C-layout handle a miner engine cursors through, the open/destroy calls
//! that allocate and release it on the native heap, and the thread-local
//! last-error slot queried for diagnostics after a failed open.
//!
//! Handles returned by the `open_*` functions are always non-null; failure
//! is reported in-band through [`STREAM_FAILED`] in the handle's
//! `state_flags`, with a human-readable reason left in the last-error slot.
//! Ownership of a handle is exclusive: whoever holds the pointer must
//! destroy it exactly once with the matching `destroy_*` call. The wrapper
//! types in [`crate::stream`] treat this memory as foreign and never alias
//! it through safe references while the engine may be reading.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::ptr;

/// Bit set in [`StreamHandle::state_flags`] when the stream failed to open
/// or entered an unrecoverable state.
pub const STREAM_FAILED: u32 = 1 << 0;

/// The opaque record a miner engine reads through.
///
/// Layout is C-compatible so the handle can cross an FFI boundary into a
/// native miner unchanged. `data`/`len` describe the byte source, `pos` is
/// the engine's cursor, and `state_flags` carries the failure bit.
#[repr(C)]
#[derive(Debug)]
pub struct StreamHandle {
    /// State bits; see [`STREAM_FAILED`].
    pub state_flags: u32,
    /// First byte of the backing memory. Null only on a failed open.
    pub data: *const u8,
    /// Length of the backing memory in bytes, trailing `\0` included.
    pub len: usize,
    /// Engine cursor, in bytes from `data`. Starts at zero.
    pub pos: usize,
}

/// Engine allocation backing a file-based stream.
///
/// Embeds the [`StreamHandle`] as its first field (so a pointer to the
/// handle and a pointer to the allocation coincide, as a native consumer
/// expects) and owns the loaded file contents.
#[repr(C)]
#[derive(Debug)]
pub struct FileStreamHandle {
    /// The handle handed to the engine.
    pub stream: StreamHandle,
    contents: Vec<u8>,
}

/// Engine allocation backing a buffer-based stream.
///
/// Holds no memory of its own beyond the handle: `data` points straight
/// into the caller's buffer.
#[repr(C)]
#[derive(Debug)]
pub struct BufferStreamHandle {
    /// The handle handed to the engine.
    pub stream: StreamHandle,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_last_error(message: impl Into<String>) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(message.into()));
}

/// Returns the most recent engine-side failure message on this thread, if
/// any. Set on every failed open; not cleared on success.
pub fn last_error() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}

fn failed_handle() -> StreamHandle {
    StreamHandle {
        state_flags: STREAM_FAILED,
        data: ptr::null(),
        len: 0,
        pos: 0,
    }
}

/// Opens `path` as a stream source.
///
/// Always returns a non-null allocation; if the file cannot be read, the
/// returned handle carries [`STREAM_FAILED`] and [`last_error`] holds the
/// reason. The caller owns the allocation and must release it with
/// [`destroy_file_stream`].
pub fn open_file_stream(path: &Path) -> *mut FileStreamHandle {
    let mut handle = Box::new(FileStreamHandle {
        stream: failed_handle(),
        contents: Vec::new(),
    });
    match fs::read(path) {
        Ok(contents) => {
            handle.contents = contents;
            handle.stream = StreamHandle {
                state_flags: 0,
                data: handle.contents.as_ptr(),
                len: handle.contents.len(),
                pos: 0,
            };
        }
        Err(err) => {
            set_last_error(format!("cannot open {}: {}", path.display(), err));
        }
    }
    Box::into_raw(handle)
}

/// Wraps `len` bytes at `data` as a stream source, zero copy.
///
/// The scanning convention requires the final byte to be `\0`; a buffer
/// without the terminator yields a handle with [`STREAM_FAILED`] set.
/// The backing memory stays owned by the caller and must outlive the
/// handle. Release with [`destroy_buffer_stream`].
///
/// # Safety
///
/// `data` must point to `len` readable bytes (or be null, which is
/// reported as a failure rather than dereferenced).
pub unsafe fn open_buffer_stream(data: *const u8, len: usize) -> *mut BufferStreamHandle {
    let stream = if data.is_null() || len == 0 {
        set_last_error("no buffer memory given");
        failed_handle()
    } else if unsafe { *data.add(len - 1) } != 0 {
        set_last_error("buffer is not null-terminated");
        failed_handle()
    } else {
        StreamHandle {
            state_flags: 0,
            data,
            len,
            pos: 0,
        }
    };
    Box::into_raw(Box::new(BufferStreamHandle { stream }))
}

/// Releases a file stream allocation, including the loaded file contents.
///
/// # Safety
///
/// `handle` must come from [`open_file_stream`] and must not have been
/// destroyed already.
pub unsafe fn destroy_file_stream(handle: *mut FileStreamHandle) {
    debug_assert!(!handle.is_null());
    drop(unsafe { Box::from_raw(handle) });
}

/// Releases a buffer stream allocation. The caller's buffer is untouched.
///
/// # Safety
///
/// `handle` must come from [`open_buffer_stream`] and must not have been
/// destroyed already.
pub unsafe fn destroy_buffer_stream(handle: *mut BufferStreamHandle) {
    debug_assert!(!handle.is_null());
    drop(unsafe { Box::from_raw(handle) });
}
