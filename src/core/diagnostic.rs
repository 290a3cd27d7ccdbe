//! Diagnostic stream for recoverable problems.
//!
//! Every recoverable [`DepgenError`] found while resolving or emitting is pushed
//! here. Each one is logged as a single line (standard error in the binary)
//! and kept so that callers and tests can inspect what happened. Skipped
//! optional includes are logged at `info`, everything else at `warn`.

use tracing::{info, warn};

use super::error::DepgenError;

/// Ordered collection of recoverable errors reported during one run.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<DepgenError>,
}

impl Diagnostics {
    /// Create an empty diagnostic stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn report(&mut self, error: DepgenError) {
        debug_assert!(error.is_recoverable(), "hard failure reported as diagnostic: {error}");
        match error {
            DepgenError::MissingOptionalInclude { .. } => info!("{error}"),
            _ => warn!("{error}"),
        }
        self.entries.push(error);
    }

    /// All diagnostics in the order they were reported.
    #[must_use]
    pub fn entries(&self) -> &[DepgenError] {
        &self.entries
    }

    /// Number of reported diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move every diagnostic of `other` to the end of this stream without logging again.
    pub fn append(&mut self, other: &mut Self) {
        self.entries.append(&mut other.entries);
    }
}
