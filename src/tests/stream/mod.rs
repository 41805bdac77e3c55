//! Stream wrapper tests.

mod buffer_tests;
mod file_tests;
