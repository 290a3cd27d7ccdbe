//! Core types for doc-depgen
//!
//! This module holds the pieces every other module builds on:
//!
//! - [`error`] - [`DepgenError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`diagnostic`] - the [`Diagnostics`] stream for recoverable problems
//! - [`format`] - [`SourceFormat`] detection from file extensions
//!
//! # Error handling pattern
//!
//! Recoverable problems are reported and processing continues:
//!
//! ```rust
//! use doc_depgen::core::{DepgenError, Diagnostics};
//!
//! let mut diagnostics = Diagnostics::new();
//! diagnostics.report(DepgenError::UnsupportedFormat {
//!     path: "notes.txt".to_string(),
//! });
//! assert_eq!(diagnostics.len(), 1);
//! ```
//!
//! Fatal problems are returned as [`anyhow::Error`] and turned into a
//! colored message by the binary.

pub mod diagnostic;
pub mod error;
pub mod format;

pub use diagnostic::Diagnostics;
pub use error::{DepgenError, ErrorContext, user_friendly_error};
pub use format::{SourceFormat, extension_of};
