//! doc-depgen - make dependency rules for LaTeX and Markdown documents
//!
//! Given a list of top-level documents, doc-depgen finds every file each one
//! transitively pulls in (included sources, packages, classes,
//! bibliographies, images, code listings) and prints make rules binding the
//! document's output target to those files. A final rule makes the rule file
//! itself depend on every tracked source, so make regenerates it when the
//! document tree changes.
//!
//! # Architecture Overview
//!
//! ```text
//! files ──► resolver ──► DependencySet ──► emitter ──► make rules
//!              │                              │
//!              ├─ latex: logical lines,       └─ diagnostics (stderr)
//!              │         directive table
//!              └─ markdown: image references
//! ```
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line parsing, logging setup, output handling
//! - [`config`] - Generator settings and `depgen.toml` loading
//! - [`constants`] - Built-in defaults
//! - [`core`] - Error kinds, diagnostics, source format detection
//! - [`emitter`] - Rule rendering and the batch driver
//! - [`latex`] - Comment-aware line normalization and directive matching
//! - [`markdown`] - Image reference extraction
//! - [`resolver`] - Recursive dependency resolution
//! - [`utils`] - File system access and atomic writes
//!
//! # Example
//!
//! ```rust,no_run
//! use doc_depgen::config::DepgenConfig;
//! use doc_depgen::emitter::generate;
//! use doc_depgen::utils::OsFileSystem;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = DepgenConfig::default();
//! let files = vec!["thesis.tex".to_string()];
//! let mut out = std::io::stdout();
//! let report = generate(&files, &config, &OsFileSystem::new(), &mut out)?;
//! eprintln!("{} diagnostics", report.diagnostics.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod emitter;
pub mod latex;
pub mod markdown;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
