//! Test utilities for doc-depgen.
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration test suite.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::utils::FileSystem;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Respects `RUST_LOG` if set, otherwise uses the provided level. Without
/// either, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// In-memory document tree.
///
/// Keeps a read counter per path so tests can check that every file is
/// scanned at most once, and can mark files as unreadable to exercise the
/// hard-failure path.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: HashMap<String, String>,
    unreadable: HashSet<String>,
    reads: RefCell<HashMap<String, usize>>,
}

impl MemoryFileSystem {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    #[must_use]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Add several empty files.
    #[must_use]
    pub fn with_empty_files(mut self, paths: &[&str]) -> Self {
        for path in paths {
            self.files.insert((*path).to_string(), String::new());
        }
        self
    }

    /// Add a file that exists but fails to read.
    #[must_use]
    pub fn with_unreadable_file(mut self, path: &str) -> Self {
        self.files.insert(path.to_string(), String::new());
        self.unreadable.insert(path.to_string());
        self
    }

    /// How many times `path` has been read.
    #[must_use]
    pub fn read_count(&self, path: &str) -> usize {
        self.reads.borrow().get(path).copied().unwrap_or(0)
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        *self.reads.borrow_mut().entry(path.to_string()).or_insert(0) += 1;

        if self.unreadable.contains(path) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }

        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("{path} not found"))
        })
    }
}
