//! Error handling for doc-depgen
//!
//! This module provides the error types and user-facing error reporting for the
//! dependency generator. The error system is built around two ideas:
//! 1. **Strongly-typed errors** ([`DepgenError`]) for precise handling in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions
//!
//! # Recoverable and fatal errors
//!
//! Most error kinds never abort a run. A missing source file, an unsupported
//! format, a degenerate target mapping or a path with a space are recorded in
//! the [`Diagnostics`](crate::core::Diagnostics) stream and processing moves on.
//! Only I/O failures on files already known to exist, invalid configuration and
//! failures writing the output are fatal; those travel as [`anyhow::Error`] up
//! to the binary, which renders them with [`user_friendly_error`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use doc_depgen::core::{DepgenError, ErrorContext};
//!
//! let context = ErrorContext::new(DepgenError::ConfigError {
//!     message: "output_extension must not be empty".to_string(),
//! })
//! .with_suggestion("Set output_extension = \"pdf\" in depgen.toml");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for doc-depgen operations.
///
/// Variants carry owned strings so that errors can be cloned into the
/// diagnostic stream and still be returned to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepgenError {
    /// A top-level argument or an included source does not exist.
    #[error("{path}: file does not exist")]
    MissingSourceFile {
        /// Path as written on the command line or in the include directive
        path: String,
    },

    /// The resolver does not know how to scan a file with this extension.
    #[error("Unsupported file: {path}")]
    UnsupportedFormat {
        /// The rejected path
        path: String,
    },

    /// An optional directive (document class, package) matched nothing on disk.
    #[error("{directive} '{argument}' not found, skipped")]
    MissingOptionalInclude {
        /// Directive name such as `documentclass`
        directive: String,
        /// Argument as written in the source
        argument: String,
    },

    /// The generated target name equals the source name.
    #[error("No dependencies written for {path}")]
    DegenerateTargetMapping {
        /// The top-level file whose target collides with itself
        path: String,
    },

    /// An emitted path contains a character make cannot handle unescaped.
    #[error("File '{path}' contains invalid characters")]
    InvalidPathCharacter {
        /// The offending path, emitted verbatim anyway
        path: String,
    },

    /// Reading a file that exists failed.
    #[error("Failed to read {path}: {reason}")]
    FileReadError {
        /// The file being read
        path: String,
        /// Underlying I/O error message
        reason: String,
    },

    /// The configuration is invalid or could not be parsed.
    #[error("Invalid configuration: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// The generated rules could not be written.
    #[error("Failed to write rules to {path}: {reason}")]
    OutputWriteError {
        /// Destination of the rule text
        path: String,
        /// Underlying I/O error message
        reason: String,
    },

    /// Any other error, with its cause chain flattened into the message.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl DepgenError {
    /// Whether this kind is recovered locally instead of aborting the batch.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingSourceFile { .. }
                | Self::UnsupportedFormat { .. }
                | Self::MissingOptionalInclude { .. }
                | Self::DegenerateTargetMapping { .. }
                | Self::InvalidPathCharacter { .. }
        )
    }
}

/// Error wrapper adding user-facing details and a suggestion.
///
/// [`display`](ErrorContext::display) prints the error in red, the details in
/// yellow and the suggestion in green on standard error.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DepgenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without suggestion or details.
    #[must_use]
    pub const fn new(error: DepgenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the terminal.
///
/// Known [`DepgenError`] values get tailored suggestions, I/O and TOML errors
/// are mapped onto the closest variant, and everything else keeps its full
/// cause chain in the message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(depgen_error) = error.downcast_ref::<DepgenError>() {
        return create_error_context(depgen_error.clone());
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(DepgenError::ConfigError {
            message: format!("{error}\n{toml_error}"),
        })
        .with_suggestion("Check the TOML syntax of the configuration file");
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::PermissionDenied {
            return ErrorContext::new(DepgenError::Other {
                message: io_error.to_string(),
            })
            .with_suggestion("Check the permissions of the document tree and output location");
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DepgenError::Other {
        message,
    })
}

fn create_error_context(error: DepgenError) -> ErrorContext {
    match &error {
        DepgenError::FileReadError { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the file is readable and not a directory")
            .with_details("The file exists but reading it failed, so the dependency list would be incomplete"),
        DepgenError::ConfigError { .. } => ErrorContext::new(error)
            .with_suggestion("Fix the configuration file or the command-line overrides")
            .with_details("Configuration is read from --config or depgen.toml in the current directory"),
        DepgenError::OutputWriteError { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the output directory exists and is writable"),
        DepgenError::UnsupportedFormat { .. } => ErrorContext::new(error)
            .with_suggestion("Only .tex and Markdown (.md, .markdown, .mkdn, .mdown) files are scanned"),
        _ => ErrorContext::new(error),
    }
}
