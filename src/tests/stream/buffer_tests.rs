//! Tests for BufferStream construction and lifecycle.

use crate::error::ErrorKind;
use crate::stream::{BufferStream, Streamer};

#[test]
fn terminated_buffer_opens_with_clean_check() {
    let data = b"abc\0".to_vec();

    let stream = BufferStream::new(&data).expect("open stream");

    assert!(stream.check());
    let handle = unsafe { &*stream.stream() };
    assert_eq!(handle.len, 4);
    assert_eq!(handle.pos, 0);
}

#[test]
fn buffer_is_wrapped_without_copying() {
    let data = b"zero copy\0".to_vec();

    let stream = BufferStream::new(&data).expect("open stream");

    let handle = unsafe { &*stream.stream() };
    assert_eq!(handle.data, data.as_ptr());
    assert_eq!(stream.buffer().as_ptr(), data.as_ptr());
}

#[test]
fn empty_buffer_is_rejected_before_the_engine_runs() {
    let err = BufferStream::new(&[]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "nil buffer given");
}

#[test]
fn unterminated_buffer_fails_construction() {
    let data = b"abc".to_vec();

    let err = BufferStream::new(&data).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Construction);
    let message = err.to_string();
    assert!(message.contains("unable to create BufferStream"));
    assert!(message.contains("null-terminated"));
}

#[test]
fn close_leaves_the_caller_buffer_intact() {
    let data = b"abc\0".to_vec();
    let mut stream = BufferStream::new(&data).expect("open stream");

    stream.close().expect("close");

    assert_eq!(data, b"abc\0");
}

#[test]
fn first_close_succeeds_second_fails() {
    let data = b"abc\0".to_vec();
    let mut stream = BufferStream::new(&data).expect("open stream");

    stream.close().expect("first close");

    let err = stream.close().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lifecycle);
    assert!(err.to_string().contains("already closed"));
}

#[test]
fn handle_is_null_after_close() {
    let data = b"abc\0".to_vec();
    let mut stream = BufferStream::new(&data).expect("open stream");

    stream.close().expect("close");

    assert!(stream.stream().is_null());
    assert!(!stream.check());
}

#[test]
fn drop_without_close_releases_the_handle() {
    let data = b"abc\0".to_vec();
    let stream = BufferStream::new(&data).expect("open stream");

    drop(stream);

    // The caller's buffer survives the stream.
    assert_eq!(data, b"abc\0");
}
