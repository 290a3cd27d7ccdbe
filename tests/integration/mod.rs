//! Integration test suite for doc-depgen
//!
//! These tests run the compiled binary against temporary document trees and
//! check the generated rules on standard output and the diagnostics on
//! standard error.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: Flags, settings files, output file, exit status
//! - **latex**: LaTeX trees (includes, images, listings, comments, cycles)
//! - **markdown**: Markdown trees and mixed-format documents

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod latex;
mod markdown;
