//! Default values used throughout the doc-depgen codebase.
//!
//! These are the built-in settings of [`DepgenConfig`](crate::config::DepgenConfig).
//! Defining them centrally keeps the CLI help text, the configuration defaults
//! and the tests in agreement.

/// Extension given to generated targets (`doc.tex` → `doc.pdf`).
pub const DEFAULT_OUTPUT_EXTENSION: &str = "pdf";

/// Directory prepended to `\includeimage` arguments.
pub const DEFAULT_IMAGE_ROOT_DIRECTORY: &str = "img";

/// Image extensions in probing priority order.
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["eps", "jpg", "pdf", "png"];

/// Extension appended to an image reference that matches nothing on disk.
pub const DEFAULT_IMAGE_EXTENSION: &str = "pdf";

/// Extensions recognised as Markdown sources.
pub const DEFAULT_MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mkdn", "mdown"];

/// Source languages probed for `\lstinputlisting` arguments without an extension.
pub const DEFAULT_LISTING_EXTENSIONS: &[&str] = &[
    "c", "cpp", "erl", "h", "hs", "idl", "java", "lsp", "php", "py", "sh", "tex",
];

/// Extensions that may appear in the aggregate rule-file dependency list.
///
/// The Markdown family is always added on top of these.
pub const DEFAULT_TRACKABLE_EXTENSIONS: &[&str] = &["bib", "cls", "tex"];

/// Meta-target that regenerates the rule file itself.
pub const DEFAULT_RULE_FILE_TARGET: &str = "Makefile.d";

/// Configuration file the meta-target always depends on.
pub const DEFAULT_RULE_FILE_SOURCE: &str = "Makefile.files";

/// Configuration file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "depgen.toml";

/// Extension identifying LaTeX sources.
pub const LATEX_EXTENSION: &str = "tex";
