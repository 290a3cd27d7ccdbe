//! Directive matching and extension probing.
//!
//! A [`DirectiveRule`] describes one LaTeX command that references a file:
//! the pattern capturing its argument, the extensions to try on disk, the
//! extension to assume when nothing exists yet, and whether a miss is
//! tolerated. The [`DirectiveTable`] holds every rule for LaTeX sources; each
//! rule is applied independently to every logical line.
//!
//! Matching is pattern-based. Arguments that look like macro parameters
//! (`#1`) or contain a backslash are rejected instead of being expanded.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

use crate::config::DepgenConfig;
use crate::utils::FileSystem;

/// `{argument}` capture.
const ARG: &str = r"\{(.+?)\}";
/// `{ignored}` argument, not captured.
const ARG_IGNORED: &str = r"\{.+?\}";
/// Optional `[options]` group.
const OPT: &str = r"(?:\[[^\]]*\])?";
/// Arguments that are macro parameters or contain macros.
const EXCLUSION: &str = r"#\d|\\";

/// Where a directive argument led.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    /// A file that exists on disk.
    Verified(String),
    /// Nothing matched; the default extension was applied to the argument.
    ///
    /// Stands for an artifact that may not have been built yet.
    Constructed(String),
}

impl ResolvedPath {
    /// The resolved path, verified or not.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Verified(path) | Self::Constructed(path) => path,
        }
    }

    /// Consume into the path string.
    #[must_use]
    pub fn into_path(self) -> String {
        match self {
            Self::Verified(path) | Self::Constructed(path) => path,
        }
    }
}

/// Result of applying one rule to one occurrence in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The argument resolved to a dependency.
    Resolved(ResolvedPath),
    /// An optional directive whose file does not exist.
    SkippedOptional {
        /// Directive name
        directive: &'static str,
        /// Argument after the directory prefix was applied
        argument: String,
    },
}

/// One file-referencing LaTeX directive.
#[derive(Debug, Clone)]
pub struct DirectiveRule {
    name: &'static str,
    pattern: Regex,
    candidate_extensions: Vec<String>,
    default_extension: Option<String>,
    directory_prefix: Option<String>,
    exclusion: Option<Regex>,
    optional: bool,
}

impl DirectiveRule {
    /// Create a rule from a pattern with exactly one capture group.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid pattern for directive '{name}': {pattern}"))?;
        Ok(Self {
            name,
            pattern,
            candidate_extensions: Vec::new(),
            default_extension: None,
            directory_prefix: None,
            exclusion: None,
            optional: false,
        })
    }

    /// Extensions probed in order. The first one also becomes the default.
    #[must_use]
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.candidate_extensions =
            extensions.iter().map(|ext| ext.as_ref().to_string()).collect();
        self.default_extension = self.candidate_extensions.first().cloned();
        self
    }

    /// Extension appended when nothing exists on disk; `None` keeps the argument bare.
    #[must_use]
    pub fn with_default_extension(mut self, extension: Option<&str>) -> Self {
        self.default_extension = extension.map(str::to_string);
        self
    }

    /// Directory prepended to every argument.
    #[must_use]
    pub fn with_directory(mut self, directory: &str) -> Self {
        self.directory_prefix = (!directory.is_empty()).then(|| directory.to_string());
        self
    }

    /// Arguments matching `exclusion` are ignored.
    #[must_use]
    pub fn with_exclusion(mut self, exclusion: Regex) -> Self {
        self.exclusion = Some(exclusion);
        self
    }

    /// Tolerate a miss silently instead of constructing a path.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Directive name used in logs and diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a miss is tolerated.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}

/// All directive rules for one source format.
#[derive(Debug, Clone)]
pub struct DirectiveTable {
    rules: Vec<DirectiveRule>,
}

impl DirectiveTable {
    /// The LaTeX directive table for the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the built-in patterns fails to compile.
    pub fn latex(config: &DepgenConfig) -> Result<Self> {
        let exclusion = Regex::new(EXCLUSION).context("Invalid argument exclusion pattern")?;
        let images = config.image_extensions.as_slice();
        let default_image = Some(config.default_image_extension.as_str());

        let rules = vec![
            DirectiveRule::new("documentclass", &format!(r"\\documentclass{OPT}{ARG}"))?
                .with_extensions(&["cls"])
                .optional(),
            DirectiveRule::new("usepackage", &format!(r"\\usepackage{OPT}{ARG}"))?
                .with_extensions(&["sty"])
                .optional(),
            DirectiveRule::new("input", &format!(r"\\(?:input|include){ARG}"))?
                .with_extensions(&["tex"]),
            DirectiveRule::new("bibliography", &format!(r"\\bibliography{ARG}"))?
                .with_extensions(&["bib"]),
            DirectiveRule::new("includegraphics", &format!(r"\\includegraphics{OPT}{ARG}"))?
                .with_extensions(images)
                .with_default_extension(default_image),
            DirectiveRule::new(
                "includeimage",
                &format!(r"\\includeimage(?:base|figure)?(?:\[[^\]]*\])*{ARG}"),
            )?
            .with_extensions(images)
            .with_default_extension(default_image)
            .with_directory(&config.image_root_directory),
            DirectiveRule::new(
                "pgfdeclareimage",
                &format!(r"\\pgfdeclareimage{OPT}{ARG_IGNORED}{ARG}"),
            )?
            .with_extensions(images)
            .with_default_extension(default_image),
            DirectiveRule::new("inputminted", &format!(r"\\inputminted{OPT}{ARG_IGNORED}{ARG}"))?,
            DirectiveRule::new("lstinputlisting", &format!(r"\\lstinputlisting{OPT}{ARG}"))?
                .with_extensions(config.listing_extensions.as_slice())
                .with_default_extension(None),
        ];

        Ok(Self {
            rules: rules.into_iter().map(|rule| rule.with_exclusion(exclusion.clone())).collect(),
        })
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[DirectiveRule] {
        &self.rules
    }
}

/// First existing file among `base.<ext>` for each candidate, then `base` itself.
///
/// Pure apart from the `exists` predicate, so the priority order can be
/// checked against a virtual tree.
pub fn probe_extensions<F>(base: &str, candidates: &[String], exists: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    candidates
        .iter()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!("{base}.{ext}"))
        .chain(std::iter::once(base.to_string()))
        .find(|candidate| exists(candidate))
}

/// Apply `rule` to every occurrence in a logical line.
///
/// Occurrences with an empty or excluded argument are dropped. Each remaining
/// argument is resolved by extension probing; when nothing exists an optional
/// rule yields [`MatchOutcome::SkippedOptional`] and a mandatory rule yields a
/// [`ResolvedPath::Constructed`] path carrying the default extension.
pub fn match_directive<F>(line: &str, rule: &DirectiveRule, fs: &F) -> Vec<MatchOutcome>
where
    F: FileSystem + ?Sized,
{
    rule.pattern
        .captures_iter(line)
        .filter_map(|captures| captures.get(1))
        .map(|argument| argument.as_str())
        .filter(|argument| !argument.is_empty())
        .filter(|argument| !rule.exclusion.as_ref().is_some_and(|ex| ex.is_match(argument)))
        .filter_map(|argument| resolve_argument(argument, rule, fs))
        .collect()
}

fn resolve_argument<F>(argument: &str, rule: &DirectiveRule, fs: &F) -> Option<MatchOutcome>
where
    F: FileSystem + ?Sized,
{
    let argument = match &rule.directory_prefix {
        Some(directory) => Path::new(directory).join(argument).to_string_lossy().into_owned(),
        None => argument.to_string(),
    };

    if let Some(found) =
        probe_extensions(&argument, &rule.candidate_extensions, |path| fs.is_file(path))
    {
        return Some(MatchOutcome::Resolved(ResolvedPath::Verified(found)));
    }

    if rule.optional {
        return Some(MatchOutcome::SkippedOptional {
            directive: rule.name,
            argument,
        });
    }

    let constructed = match &rule.default_extension {
        Some(ext) if !argument.ends_with(&format!(".{ext}")) => format!("{argument}.{ext}"),
        _ => argument,
    };
    Some(MatchOutcome::Resolved(ResolvedPath::Constructed(constructed)))
}
