//! Command-line interface for doc-depgen.
//!
//! The binary takes one or more top-level documents and prints make rules for
//! them on standard output (or writes them to `--output`). Diagnostics and
//! log lines go to standard error, one per line, so they never end up in the
//! generated rules.
//!
//! # Usage
//!
//! ```bash
//! doc-depgen thesis.tex slides.md > Makefile.d
//! doc-depgen --output-ext dvi --image-root figures paper.tex
//! doc-depgen -o Makefile.d $(cat Makefile.files)
//! ```
//!
//! # Settings
//!
//! Settings are layered: built-in defaults, then `--config <FILE>` (or
//! `depgen.toml` in the working directory when present), then the
//! `--output-ext` and `--image-root` flags.
//!
//! # Verbosity
//!
//! - default: `info` (skipped optional includes and warnings)
//! - `--verbose`: `debug` (scanned files, constructed paths)
//! - `--quiet`: errors only
//!
//! `RUST_LOG` overrides all of these.


use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DepgenConfig;
use crate::core::DepgenError;
use crate::emitter::{GenerationReport, generate};
use crate::utils::{FileSystem, OsFileSystem, atomic_write};

static INIT_LOGGING: Once = Once::new();

/// Make-style dependency generator for LaTeX and Markdown documents.
#[derive(Parser, Debug)]
#[command(
    name = "doc-depgen",
    about = "Generate make dependency rules for LaTeX and Markdown documents",
    version,
    long_about = "doc-depgen scans LaTeX and Markdown sources for included files, images, \
                  bibliographies and listings, and prints one make rule per document \
                  binding its output target to everything it transitively depends on."
)]
pub struct Cli {
    /// Top-level documents, processed in order.
    #[arg(required = true, num_args = 1.., value_name = "FILES")]
    files: Vec<String>,

    /// Settings file (defaults to `depgen.toml` in the working directory).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extension of generated targets, e.g. `pdf` or `dvi`.
    #[arg(long = "output-ext", value_name = "EXT")]
    output_ext: Option<String>,

    /// Directory prepended to `\includeimage` arguments.
    #[arg(long = "image-root", value_name = "DIR")]
    image_root: Option<String>,

    /// Write the rules to this file instead of standard output.
    ///
    /// The file is replaced atomically, so make never sees a half-written
    /// rule file.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log scanned files and constructed paths.
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Log level selected by `--verbose` and `--quiet`.
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::INFO
        }
    }

    /// Run the generator in the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid, a source cannot be read,
    /// or the rules cannot be written.
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level());

        let work_dir = std::env::current_dir().context("Failed to determine working directory")?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&work_dir, &mut out)?;
        Ok(())
    }

    /// Run the generator against `work_dir`.
    ///
    /// Source paths, the default settings file and a relative `--output` are
    /// all resolved against `work_dir`. Without `--output` the rules go to
    /// `stdout`.
    ///
    /// # Errors
    ///
    /// Same as [`Cli::execute`].
    pub fn run<W: Write>(self, work_dir: &Path, stdout: &mut W) -> Result<GenerationReport> {
        let fs = OsFileSystem::rooted(work_dir);
        self.run_with(work_dir, &fs, stdout)
    }

    /// Like [`Cli::run`], reading sources through `fs`.
    ///
    /// The rules are rendered completely before anything reaches `stdout` or
    /// the output file, so a run aborted by a hard failure writes nothing.
    ///
    /// # Errors
    ///
    /// Same as [`Cli::execute`].
    pub fn run_with<W, F>(self, work_dir: &Path, fs: &F, stdout: &mut W) -> Result<GenerationReport>
    where
        W: Write,
        F: FileSystem + ?Sized,
    {
        let config = self.load_config(work_dir)?;

        let mut buffer = Vec::new();
        let report = generate(&self.files, &config, fs, &mut buffer)?;

        match &self.output {
            None => {
                stdout.write_all(&buffer).context("Failed to write rules to standard output")?;
                stdout.flush().context("Failed to flush standard output")?;
            }
            Some(output) => {
                let path = work_dir.join(output);
                atomic_write(&path, &buffer).map_err(|e| DepgenError::OutputWriteError {
                    path: output.display().to_string(),
                    reason: format!("{e:#}"),
                })?;
                info!("Wrote {} rules to {}", report.rules.len(), output.display());
            }
        }

        debug!(
            "Processed {} files, {} diagnostics",
            self.files.len(),
            report.diagnostics.len()
        );
        Ok(report)
    }

    /// Defaults, then the settings file, then command-line overrides.
    fn load_config(&self, work_dir: &Path) -> Result<DepgenConfig> {
        let explicit = self.config.as_ref().map(|path| work_dir.join(path));
        let config = DepgenConfig::load(explicit.as_deref(), work_dir)?
            .with_overrides(self.output_ext.clone(), self.image_root.clone());
        config.validate()?;
        Ok(config)
    }
}

/// Install the stderr log subscriber once per process.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logging(level: Level) {
    INIT_LOGGING.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(level.to_string())
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .without_time()
                    .with_target(false)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}
