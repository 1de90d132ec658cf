//! Create-release command: build, validate, and emit the release manifest
//!
//! The pipeline is all-or-nothing: any violation aborts the run before a single
//! byte of manifest output is written.

use crate::core::error::{RelmanError, RelmanResult, ResultExt};
use crate::manifest::encode;
use crate::manifest::validate::validate;
use crate::product::definition::ProductDefinition;
use crate::product::kubeform;
use std::path::PathBuf;

/// Run the create-release command
pub fn run_create_release(
  definition: Option<PathBuf>,
  release: Option<String>,
  prerelease: String,
  output: Option<PathBuf>,
) -> RelmanResult<()> {
  let manifest = match definition {
    Some(path) => {
      let definition = ProductDefinition::load(&path)?;
      let version = release.unwrap_or_else(|| definition.release.clone());
      definition.build(&version, &prerelease)
    }
    None => {
      let version = release.unwrap_or_else(|| kubeform::DEFAULT_RELEASE_VERSION.to_string());
      kubeform::build(&version, &prerelease)
    }
  };

  let violations = validate(&manifest);
  if !violations.is_empty() {
    return Err(RelmanError::validation(violations));
  }

  let data = encode::marshal(&manifest)?;
  let text = String::from_utf8(data)?;

  match output {
    Some(path) => {
      std::fs::write(&path, format!("{}\n", text))
        .with_context(|| format!("failed to write manifest to {}", path.display()))?;
      println!("✅ Wrote release manifest for {} to {}", manifest.release, path.display());
    }
    None => {
      println!("{}", text);
    }
  }

  Ok(())
}
