//! Source format detection.
//!
//! The format of a file is decided purely by its extension: `.tex` is LaTeX,
//! any configured Markdown extension is Markdown, everything else cannot be
//! scanned for further dependencies.

use std::fmt;
use std::path::Path;

use crate::config::DepgenConfig;
use crate::constants::LATEX_EXTENSION;

/// Format tag of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// LaTeX source (`.tex`)
    Latex,
    /// Markdown source (`.md`, `.markdown`, ...)
    Markdown,
    /// Anything the resolver does not scan (images, bibliographies, listings)
    Unsupported,
}

impl SourceFormat {
    /// Detect the format of `path` from its extension.
    #[must_use]
    pub fn detect(path: &str, config: &DepgenConfig) -> Self {
        match extension_of(path) {
            Some(LATEX_EXTENSION) => Self::Latex,
            Some(ext) if config.is_markdown_extension(ext) => Self::Markdown,
            _ => Self::Unsupported,
        }
    }

    /// Whether files of this format can contain further dependencies.
    #[must_use]
    pub const fn is_recursable(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latex => write!(f, "LaTeX"),
            Self::Markdown => write!(f, "Markdown"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Extension of the final path component, without the dot.
#[must_use]
pub fn extension_of(path: &str) -> Option<&str> {
    Path::new(path).extension().and_then(|ext| ext.to_str())
}
