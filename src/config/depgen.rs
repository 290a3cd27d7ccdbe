//! Generator settings.
//!
//! [`DepgenConfig`] replaces what would otherwise be process-wide constants:
//! it is built once, validated, and then passed by reference to the resolver
//! and the rule emitter. Two passes with different settings can therefore run
//! side by side in one process.
//!
//! ```toml
//! # depgen.toml
//! output_extension = "dvi"
//! image_root_directory = "figures"
//! image_extensions = ["pdf", "png"]
//! default_image_extension = "pdf"
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::parser::parse_config;
use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_IMAGE_EXTENSION, DEFAULT_IMAGE_EXTENSIONS,
    DEFAULT_IMAGE_ROOT_DIRECTORY, DEFAULT_LISTING_EXTENSIONS, DEFAULT_MARKDOWN_EXTENSIONS,
    DEFAULT_OUTPUT_EXTENSION, DEFAULT_RULE_FILE_SOURCE, DEFAULT_RULE_FILE_TARGET,
    DEFAULT_TRACKABLE_EXTENSIONS,
};
use crate::core::{DepgenError, extension_of};

/// Immutable settings for one dependency generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepgenConfig {
    /// Extension of generated targets (`doc.tex` → `doc.<output_extension>`).
    pub output_extension: String,

    /// Directory prepended to `\includeimage` arguments.
    pub image_root_directory: String,

    /// Image extensions in probing priority order.
    pub image_extensions: Vec<String>,

    /// Extension appended to image references matching nothing on disk.
    ///
    /// Must be one of `image_extensions`.
    pub default_image_extension: String,

    /// Extensions recognised as Markdown sources.
    pub markdown_extensions: Vec<String>,

    /// Extensions probed for `\lstinputlisting` arguments.
    pub listing_extensions: Vec<String>,

    /// Extensions allowed in the aggregate rule (Markdown extensions are always added).
    pub trackable_extensions: Vec<String>,

    /// Meta-target of the aggregate rule.
    pub rule_file_target: String,

    /// File the meta-target always depends on.
    pub rule_file_source: String,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

impl Default for DepgenConfig {
    fn default() -> Self {
        Self {
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            image_root_directory: DEFAULT_IMAGE_ROOT_DIRECTORY.to_string(),
            image_extensions: owned(DEFAULT_IMAGE_EXTENSIONS),
            default_image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
            markdown_extensions: owned(DEFAULT_MARKDOWN_EXTENSIONS),
            listing_extensions: owned(DEFAULT_LISTING_EXTENSIONS),
            trackable_extensions: owned(DEFAULT_TRACKABLE_EXTENSIONS),
            rule_file_target: DEFAULT_RULE_FILE_TARGET.to_string(),
            rule_file_source: DEFAULT_RULE_FILE_SOURCE.to_string(),
        }
    }
}

impl DepgenConfig {
    /// Load settings from an explicit file, or from `depgen.toml` in `search_dir`.
    ///
    /// An explicit path must exist. Without one, a missing `depgen.toml` simply
    /// yields the defaults. The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting settings are invalid.
    pub fn load(explicit: Option<&Path>, search_dir: &Path) -> Result<Self> {
        let config = match explicit {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                parse_config(path)?
            }
            None => {
                let candidate = search_dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    debug!("Loading configuration from {}", candidate.display());
                    parse_config(&candidate)?
                } else {
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded settings.
    #[must_use]
    pub fn with_overrides(
        mut self,
        output_extension: Option<String>,
        image_root_directory: Option<String>,
    ) -> Self {
        if let Some(ext) = output_extension {
            self.output_extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(dir) = image_root_directory {
            self.image_root_directory = dir;
        }
        self
    }

    /// Check the invariants the resolver and emitter rely on.
    ///
    /// # Errors
    ///
    /// Returns [`DepgenError::ConfigError`] if the output extension is empty,
    /// the image priority list is empty, or the default image extension is not
    /// part of the priority list.
    pub fn validate(&self) -> Result<(), DepgenError> {
        if self.output_extension.is_empty() {
            return Err(DepgenError::ConfigError {
                message: "output_extension must not be empty".to_string(),
            });
        }
        if self.image_extensions.is_empty() {
            return Err(DepgenError::ConfigError {
                message: "image_extensions must list at least one extension".to_string(),
            });
        }
        if !self.image_extensions.contains(&self.default_image_extension) {
            return Err(DepgenError::ConfigError {
                message: format!(
                    "default_image_extension '{}' is not one of image_extensions [{}]",
                    self.default_image_extension,
                    self.image_extensions.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Whether `ext` (without the dot) belongs to the Markdown family.
    #[must_use]
    pub fn is_markdown_extension(&self, ext: &str) -> bool {
        self.markdown_extensions.iter().any(|candidate| candidate == ext)
    }

    /// Whether `path` may appear in the aggregate rule-file dependency list.
    #[must_use]
    pub fn is_trackable(&self, path: &str) -> bool {
        extension_of(path).is_some_and(|ext| {
            self.trackable_extensions.iter().any(|candidate| candidate == ext)
                || self.is_markdown_extension(ext)
        })
    }
}
