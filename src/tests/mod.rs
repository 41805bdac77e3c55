//! Internal test modules, mirroring the crate's module structure.

mod stream;
