//! Common test utilities for doc-depgen integration tests
//!
//! A [`TestProject`] is a temporary document tree; the binary is run with
//! that tree as its working directory.

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary document tree.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
}

impl TestProject {
    /// Create an empty project directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("docs");
        fs::create_dir_all(&project_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// Get the project directory path
    pub fn path(&self) -> &Path {
        &self.project_dir
    }

    /// Write a file relative to the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) -> Result<&Self> {
        let full_path = self.project_dir.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        Ok(self)
    }

    /// Create several empty files
    pub fn touch(&self, paths: &[&str]) -> Result<&Self> {
        for path in paths {
            self.write_file(path, "")?;
        }
        Ok(self)
    }

    /// Read a file relative to the project
    pub fn read_file(&self, path: &str) -> Result<String> {
        fs::read_to_string(self.project_dir.join(path))
            .with_context(|| format!("Failed to read {path}"))
    }

    /// Command for the binary, running inside the project with a clean log setup
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("doc-depgen").unwrap();
        cmd.current_dir(&self.project_dir).env_remove("RUST_LOG").env("NO_COLOR", "1");
        cmd
    }

    /// Run the binary with `args` and capture its output
    pub fn run_depgen(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.command().args(args).output().context("Failed to run doc-depgen")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStderr: {}",
            self.code, self.stderr
        );
        self
    }

    /// Assert the command failed with exit status 1
    pub fn assert_failure(&self) -> &Self {
        assert_eq!(self.code, Some(1), "Expected exit status 1\nStdout: {}", self.stdout);
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}

/// Standard rule-file banner, including the blank line after it
pub const HEADER: &str = "###########################################\n\
                          # Makefile (LaTeX) generated dependencies #\n\
                          ###########################################\n\n";
