//! Utility modules for doc-depgen
//!
//! - [`fs`] - the [`FileSystem`](fs::FileSystem) abstraction used by the resolver
//!   and atomic output writing

pub mod fs;

pub use fs::{FileSystem, OsFileSystem, atomic_write};
