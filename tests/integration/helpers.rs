//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A temporary working directory for CLI runs
pub struct TestDir {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestDir {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write a file relative to the test directory, returning its absolute path
  pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = self.path.join(name);
    std::fs::write(&file_path, content)?;
    Ok(file_path)
  }

  /// Read a file relative to the test directory
  pub fn read_file(&self, name: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(name))?)
  }
}

/// Run the relman CLI, failing the test if it exits non-zero
pub fn run_relman(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_relman_unchecked(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "relman command failed: relman {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the relman CLI and return the raw output, whatever the exit status
pub fn run_relman_unchecked(cwd: &Path, args: &[&str]) -> Result<Output> {
  let relman_bin = env!("CARGO_BIN_EXE_relman");

  Command::new(relman_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run relman")
}
