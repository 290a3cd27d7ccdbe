//! Rule emission.
//!
//! Turns resolved dependency sets into make rules. For every top-level file
//! the emitter drives the [`DependencyResolver`] once and writes one stanza:
//!
//! ```text
//! # Generated for doc.tex
//! doc.pdf: doc.tex \
//! 	chapter1.tex \
//! 	img/fig.pdf
//! ```
//!
//! After the last file one aggregate rule binds the rule file itself to the
//! configuration file and to every trackable dependency, so make regenerates
//! the rules when a source or bibliography changes. Images and listings are
//! left out of it; they only matter to the targets that use them.
//!
//! Dependencies are emitted in lexicographic order. Paths containing a space
//! are emitted verbatim but reported as invalid.

mod writer;


pub use writer::RuleWriter;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::config::DepgenConfig;
use crate::core::{DepgenError, Diagnostics};
use crate::resolver::{DependencyResolver, DependencySet, Resolution};
use crate::utils::FileSystem;

/// One emitted per-target rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRule {
    /// Top-level source file
    pub source: String,
    /// Generated target (`source` with the output extension)
    pub target: String,
    /// Transitive dependencies of `source`
    pub dependencies: DependencySet,
}

/// Everything a generation run produced besides the text itself.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Per-target rules in argument order
    pub rules: Vec<GeneratedRule>,
    /// Dependencies of the aggregate rule-file rule
    pub tracked: DependencySet,
    /// Recoverable problems, in the order they were found
    pub diagnostics: Diagnostics,
}

/// Target generated from `source`, or `None` when it would equal the source.
#[must_use]
pub fn target_name(source: &str, config: &DepgenConfig) -> Option<String> {
    let target =
        Path::new(source).with_extension(&config.output_extension).to_string_lossy().into_owned();
    (target != source).then_some(target)
}

/// Resolve every file in `files` and write the complete rule text to `out`.
///
/// Files are processed in order. Unsupported files and degenerate target
/// mappings are reported and skipped; missing files still get a rule.
///
/// # Errors
///
/// Returns an error if a source that exists cannot be read or if writing to
/// `out` fails. Both abort the run.
pub fn generate<W, F>(
    files: &[String],
    config: &DepgenConfig,
    fs: &F,
    out: &mut W,
) -> Result<GenerationReport>
where
    W: Write,
    F: FileSystem + ?Sized,
{
    let mut resolver = DependencyResolver::new(config, fs)?;
    let mut report = GenerationReport::default();
    let mut discovered = DependencySet::new();
    let mut writer = RuleWriter::new(out);

    writer.write_header().context("Failed to write rule header")?;

    for source in files {
        let resolution = resolver.resolve(source);
        report.diagnostics.append(&mut resolver.take_diagnostics());

        let dependencies = match resolution? {
            Resolution::Resolved(dependencies) => dependencies,
            Resolution::Unsupported => {
                report.diagnostics.report(DepgenError::UnsupportedFormat {
                    path: source.clone(),
                });
                continue;
            }
        };
        debug!("{source}: {} dependencies", dependencies.len());

        match target_name(source, config) {
            Some(target) => {
                check_paths(
                    [target.as_str(), source.as_str()].into_iter().chain(dependencies.iter()),
                    &mut report.diagnostics,
                );
                writer
                    .write_rule(source, &target, dependencies.iter())
                    .with_context(|| format!("Failed to write rule for {source}"))?;
                report.rules.push(GeneratedRule {
                    source: source.clone(),
                    target,
                    dependencies: dependencies.clone(),
                });
            }
            None => report.diagnostics.report(DepgenError::DegenerateTargetMapping {
                path: source.clone(),
            }),
        }

        discovered.extend_from(&dependencies);
        discovered.insert(source.as_str());
    }

    report.tracked = discovered.iter().filter(|path| config.is_trackable(path)).collect();
    check_paths(report.tracked.iter(), &mut report.diagnostics);

    writer
        .write_aggregate(&config.rule_file_target, &config.rule_file_source, report.tracked.iter())
        .context("Failed to write rule-file dependencies")?;
    writer.write_footer().context("Failed to write rule footer")?;
    writer.flush().context("Failed to flush rules")?;

    Ok(report)
}

/// Report every path make would split at a space.
fn check_paths<'a>(paths: impl IntoIterator<Item = &'a str>, diagnostics: &mut Diagnostics) {
    for path in paths {
        if path.contains(' ') {
            diagnostics.report(DepgenError::InvalidPathCharacter {
                path: path.to_string(),
            });
        }
    }
}
