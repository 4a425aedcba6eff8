//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system port implementation and atomic output writer

pub mod fs;

pub use fs::{write_atomic, LocalFs};
