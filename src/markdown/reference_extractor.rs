//! Image-reference extraction for Markdown documents.
//!
//! Markdown documents pull in other files through image syntax:
//!
//! ```markdown
//! ![Architecture](diagrams/overview.png "Optional title")
//! ![Chapter one](chapters/one.md)
//! ```
//!
//! Every local target is a dependency. Targets carrying a URL scheme
//! (`https://...`, `file://...`) are remote and never tracked. Targets in the
//! Markdown family are scanned in turn by the resolver; everything else is a
//! leaf.
//!
//! # Usage
//!
//! ```rust
//! use doc_depgen::markdown::ImageReferenceExtractor;
//!
//! # fn example() -> anyhow::Result<()> {
//! let extractor = ImageReferenceExtractor::new()?;
//! let refs = extractor.extract(r#"See ![fig](img/a.png "A") and ![web](https://x.org/b.png)"#);
//! assert_eq!(refs, vec!["img/a.png".to_string()]);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use regex::Regex;

/// `![alt](target "optional title")`; the alt text must not be empty.
///
/// The title may be `"..."`, `'...'` or `(...)` and is closed by the same
/// delimiter that opened it. The target is the shortest text before an
/// optional title, so targets containing spaces still match.
const IMAGE_REFERENCE: &str =
    r#"!\[[^\]]+\]\(([^)]*?)(?:\s+(?:"[^"]*"|'[^']*'|\([^)]*\)))?\s*\)"#;

/// Extracts local image-reference targets from Markdown lines.
#[derive(Debug, Clone)]
pub struct ImageReferenceExtractor {
    pattern: Regex,
}

impl ImageReferenceExtractor {
    /// Compile the reference pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern =
            Regex::new(IMAGE_REFERENCE).context("Invalid Markdown image reference pattern")?;
        Ok(Self {
            pattern,
        })
    }

    /// Local targets referenced on one line, in order of appearance.
    #[must_use]
    pub fn extract(&self, line: &str) -> Vec<String> {
        self.pattern
            .captures_iter(line)
            .filter_map(|captures| captures.get(1))
            .map(|target| target.as_str().trim())
            .filter(|target| !target.is_empty() && !is_remote(target))
            .map(str::to_string)
            .collect()
    }
}

/// Whether a target names a remote resource (`scheme://...`).
#[must_use]
pub fn is_remote(target: &str) -> bool {
    target.contains("://")
}
