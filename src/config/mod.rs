//! Configuration management for doc-depgen
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults from [`crate::constants`]
//! 2. A TOML file: `--config <path>`, or `depgen.toml` in the working directory
//! 3. Command-line overrides (`--output-ext`, `--image-root`)
//!
//! # Modules
//!
//! - `depgen` - the [`DepgenConfig`] value and its validation
//! - `parser` - generic TOML parsing with file path context
//!
//! # Example
//!
//! ```toml
//! output_extension = "pdf"
//! image_root_directory = "img"
//! image_extensions = ["eps", "jpg", "pdf", "png"]
//! default_image_extension = "pdf"
//! markdown_extensions = ["md", "markdown", "mkdn", "mdown"]
//! trackable_extensions = ["bib", "cls", "tex"]
//! rule_file_target = "Makefile.d"
//! rule_file_source = "Makefile.files"
//! ```

mod depgen;
mod parser;

pub use depgen::DepgenConfig;
pub use parser::parse_config;
