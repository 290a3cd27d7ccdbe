//! Markdown source scanning.
//!
//! Markdown files are scanned line by line without any comment handling.
//! Only image syntax (`![alt](target)`) references other files; see
//! [`reference_extractor`] for the exact rules.

pub mod reference_extractor;

pub use reference_extractor::{ImageReferenceExtractor, is_remote};
