//! Validate command: check an existing manifest file against every invariant
//!
//! Mirrors the create-release validation but over a decoded file, so a manifest
//! produced elsewhere (or edited by hand) can be checked before an orchestrator
//! consumes it. All violations are reported at once.

use crate::core::error::{ExitCode, RelmanError, RelmanResult, ResultExt};
use crate::manifest::encode;
use crate::manifest::validate::validate;
use std::path::PathBuf;

/// Run the validate command
pub fn run_validate(file: PathBuf, json: bool) -> RelmanResult<()> {
  let data = std::fs::read(&file).with_context(|| format!("failed to read {}", file.display()))?;
  let manifest = encode::unmarshal(&data).map_err(|e| {
    RelmanError::with_help(
      format!("failed to decode release manifest {}: {}", file.display(), e),
      "The file must be a JSON release manifest, e.g. one produced by `relman create-release`.",
    )
  })?;

  let violations = validate(&manifest);

  if json {
    println!("{}", serde_json::to_string_pretty(&violations)?);
  } else {
    println!("🔎 Validating {} ({} {})\n", file.display(), manifest.product_line, manifest.release);

    if violations.is_empty() {
      println!("✅ No violations found");
    } else {
      for violation in &violations {
        println!("❌ {}", violation);
        if let Some(suggestion) = violation.suggestion() {
          println!("   💡 Fix: {}", suggestion);
        }
      }
      println!();
      println!("Summary: {} violation(s) found", violations.len());
    }
  }

  if !violations.is_empty() {
    std::process::exit(ExitCode::Validation.as_i32());
  }

  Ok(())
}
