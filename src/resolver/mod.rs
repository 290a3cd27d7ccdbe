//! Recursive dependency resolution for document sources.
//!
//! The resolver computes the transitive closure of files a document pulls in.
//! It dispatches on the [`SourceFormat`] of each file:
//!
//! - **LaTeX** sources are split into logical lines and every rule of the
//!   [`DirectiveTable`] is applied to every line
//! - **Markdown** sources are scanned line by line for image references
//! - **Unsupported** files are leaves; asked directly, the resolver answers
//!   [`Resolution::Unsupported`] so batch callers can warn and move on
//!
//! # Algorithm
//!
//! Resolution is a depth-first walk driven by an explicit stack, so the depth
//! of an include tree is not limited by the call stack:
//!
//! 1. Pop a file; skip it if it has been scanned already in this pass
//! 2. Read it completely (the file is closed before anything else happens)
//! 3. Match every line, collecting resolved paths
//! 4. Insert each path into the [`DependencySet`]; newly inserted paths of a
//!    recursable format are pushed onto the stack
//!
//! A path already in the set is never pushed again, which is what makes
//! `\input` cycles terminate.
//!
//! # Failure handling
//!
//! A missing file yields no dependencies and a `MissingSourceFile` diagnostic.
//! A file that exists but cannot be read aborts the pass with
//! [`DepgenError::FileReadError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use doc_depgen::config::DepgenConfig;
//! use doc_depgen::resolver::{DependencyResolver, Resolution};
//! use doc_depgen::utils::OsFileSystem;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = DepgenConfig::default();
//! let fs = OsFileSystem::new();
//! let mut resolver = DependencyResolver::new(&config, &fs)?;
//!
//! if let Resolution::Resolved(deps) = resolver.resolve("thesis.tex")? {
//!     for dep in deps.iter() {
//!         println!("{dep}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod dependency_set;


pub use dependency_set::DependencySet;

use anyhow::Result;
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::config::DepgenConfig;
use crate::core::{DepgenError, Diagnostics, SourceFormat};
use crate::latex::{DirectiveTable, LogicalLines, MatchOutcome, ResolvedPath, match_directive};
use crate::markdown::ImageReferenceExtractor;
use crate::utils::FileSystem;

/// Outcome of resolving one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The file is a supported source; these are its transitive dependencies.
    Resolved(DependencySet),
    /// The file's extension is not a supported source format.
    Unsupported,
}

impl Resolution {
    /// The dependency set, if the file was supported.
    #[must_use]
    pub fn dependencies(&self) -> Option<&DependencySet> {
        match self {
            Self::Resolved(deps) => Some(deps),
            Self::Unsupported => None,
        }
    }
}

/// Format-dispatching recursive resolver.
///
/// Holds the compiled pattern tables for one configuration and the
/// diagnostics reported so far. Dependency sets are created per call and
/// never shared between unrelated top-level files.
pub struct DependencyResolver<'a, F: FileSystem + ?Sized> {
    config: &'a DepgenConfig,
    fs: &'a F,
    latex: DirectiveTable,
    markdown: ImageReferenceExtractor,
    diagnostics: Diagnostics,
}

impl<'a, F: FileSystem + ?Sized> DependencyResolver<'a, F> {
    /// Build a resolver for `config` reading through `fs`.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn new(config: &'a DepgenConfig, fs: &'a F) -> Result<Self> {
        Ok(Self {
            config,
            fs,
            latex: DirectiveTable::latex(config)?,
            markdown: ImageReferenceExtractor::new()?,
            diagnostics: Diagnostics::new(),
        })
    }

    /// Resolve the transitive dependencies of `path` into a fresh set.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that exists cannot be read.
    pub fn resolve(&mut self, path: &str) -> Result<Resolution> {
        let mut deps = DependencySet::new();
        match self.resolve_into(path, &mut deps)? {
            SourceFormat::Unsupported => Ok(Resolution::Unsupported),
            _ => Ok(Resolution::Resolved(deps)),
        }
    }

    /// Resolve `path` and grow `deps` with everything it transitively includes.
    ///
    /// Returns the detected format of `path`; for
    /// [`SourceFormat::Unsupported`] the set is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that exists cannot be read.
    pub fn resolve_into(&mut self, path: &str, deps: &mut DependencySet) -> Result<SourceFormat> {
        let format = SourceFormat::detect(path, self.config);
        if !format.is_recursable() {
            debug!("{path}: unsupported format, not scanned");
            return Ok(format);
        }

        let mut scanned = HashSet::new();
        let mut stack = vec![(path.to_string(), format)];

        while let Some((current, current_format)) = stack.pop() {
            if !scanned.insert(current.clone()) {
                continue;
            }

            let found = self.scan(&current, current_format)?;

            let mut pending = Vec::new();
            for dep in found {
                if !deps.insert(dep.clone()) {
                    continue;
                }
                let dep_format = SourceFormat::detect(&dep, self.config);
                if dep_format.is_recursable() {
                    pending.push((dep, dep_format));
                }
            }

            // Reversed so that includes are visited in source order
            stack.extend(pending.into_iter().rev());
        }

        Ok(format)
    }

    /// Diagnostics reported so far.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Take the diagnostics reported so far, leaving an empty stream.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    /// Paths referenced directly by one file.
    fn scan(&mut self, path: &str, format: SourceFormat) -> Result<Vec<String>> {
        if !self.fs.is_file(path) {
            self.diagnostics.report(DepgenError::MissingSourceFile {
                path: path.to_string(),
            });
            return Ok(Vec::new());
        }

        let content = self.fs.read_to_string(path).map_err(|e| DepgenError::FileReadError {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        debug!("Scanning {format} source {path}");

        match format {
            SourceFormat::Latex => Ok(self.scan_latex(path, &content)),
            SourceFormat::Markdown => Ok(self.scan_markdown(path, &content)),
            SourceFormat::Unsupported => Ok(Vec::new()),
        }
    }

    fn scan_latex(&mut self, path: &str, content: &str) -> Vec<String> {
        let mut outcomes = Vec::new();
        for line in LogicalLines::new(content).filter(|line| !line.is_empty()) {
            for rule in self.latex.rules() {
                outcomes.extend(match_directive(&line, rule, self.fs));
            }
        }

        let mut found = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                MatchOutcome::Resolved(ResolvedPath::Verified(dep)) => {
                    trace!("{path}: found {dep}");
                    found.push(dep);
                }
                MatchOutcome::Resolved(ResolvedPath::Constructed(dep)) => {
                    debug!("{path}: {dep} does not exist yet, depending on it anyway");
                    found.push(dep);
                }
                MatchOutcome::SkippedOptional {
                    directive,
                    argument,
                } => {
                    self.diagnostics.report(DepgenError::MissingOptionalInclude {
                        directive: directive.to_string(),
                        argument,
                    });
                }
            }
        }
        found
    }

    fn scan_markdown(&self, path: &str, content: &str) -> Vec<String> {
        content
            .lines()
            .flat_map(|line| self.markdown.extract(line))
            .inspect(|dep| trace!("{path}: found {dep}"))
            .collect()
    }
}
