//! File system access for dependency resolution.
//!
//! Resolution only ever needs two things from the file system: "is this a
//! regular file?" and "give me the whole text of this file". Both sit behind
//! the [`FileSystem`] trait so that extension probing and recursive resolution
//! can run against an in-memory tree in tests
//! (see `test_utils::MemoryFileSystem`).
//!
//! Paths are plain strings relative to the working directory, exactly as they
//! appear in the generated rules.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Minimal file access used by the resolver.
pub trait FileSystem {
    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &str) -> bool;

    /// Read the complete content of `path`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so sources in legacy
    /// encodings are still scanned.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    fn read_to_string(&self, path: &str) -> std::io::Result<String>;
}

/// The real file system, optionally anchored at a root directory.
///
/// Relative paths are resolved against the root when one is set, otherwise
/// against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct OsFileSystem {
    root: Option<PathBuf>,
}

impl OsFileSystem {
    /// File system relative to the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// File system with relative paths resolved against `root`.
    #[must_use]
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn full_path<'a>(&self, path: &'a str) -> Cow<'a, Path> {
        match &self.root {
            Some(root) => Cow::Owned(root.join(path)),
            None => Cow::Borrowed(Path::new(path)),
        }
    }
}

impl FileSystem for OsFileSystem {
    fn is_file(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        // fs::read opens and closes the file before we look at the content
        let bytes = fs::read(self.full_path(path))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Atomically write `content` to `path`.
///
/// The content goes to a temporary file in the destination directory first
/// and is then renamed over the target, so a failed run never leaves a
/// truncated rule file behind for make to include.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written or
/// persisted.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
