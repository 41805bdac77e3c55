//! Tests for FileStream construction and lifecycle.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::error::ErrorKind;
use crate::stream::{FileStream, Streamer};

fn fixture(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write fixture");
    file
}

#[test]
fn existing_file_opens_with_clean_check() {
    let file = fixture(b"hello.txt\0");

    let stream = FileStream::new(file.path()).expect("open stream");

    assert!(stream.check());
    assert!(!stream.stream().is_null());
    let handle = unsafe { &*stream.stream() };
    assert_eq!(handle.len, 10);
    assert_eq!(handle.pos, 0);
}

#[test]
fn missing_file_is_rejected_before_the_engine_runs() {
    let err = FileStream::new("definitely/not/here.txt").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("file does not exist"));
}

#[test]
fn path_is_kept_for_diagnostics() {
    let file = fixture(b"x\0");

    let stream = FileStream::new(file.path()).expect("open stream");

    assert_eq!(stream.path(), file.path());
}

#[test]
fn first_close_succeeds_second_fails() {
    let file = fixture(b"hello.txt\0");
    let mut stream = FileStream::new(file.path()).expect("open stream");

    stream.close().expect("first close");

    let err = stream.close().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lifecycle);
    assert!(err.to_string().contains("already closed"));
}

#[test]
fn handle_is_null_after_close() {
    let file = fixture(b"x\0");
    let mut stream = FileStream::new(file.path()).expect("open stream");

    stream.close().expect("close");

    assert!(stream.stream().is_null());
    assert!(!stream.check());
}

#[test]
fn drop_without_close_releases_the_handle() {
    let file = fixture(b"x\0");
    let stream = FileStream::new(file.path()).expect("open stream");

    // Relies on the drop guard; a double free here would abort the test.
    drop(stream);
}

#[test]
fn drop_after_close_does_not_double_free() {
    let file = fixture(b"x\0");
    let mut stream = FileStream::new(file.path()).expect("open stream");

    stream.close().expect("close");
    drop(stream);
}
