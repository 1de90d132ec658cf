//! External product definitions loaded from TOML
//!
//! A definition file describes the shape of a product's release — ordered
//! groups of repositories with their tags, charts, and commands — so that a new
//! product line can be added without rebuilding the tool. Building a `Release`
//! from a definition follows the same rules as the built-in definition: the
//! prerelease suffix is applied to every cycle-derived tag, and
//! `commands_if_public` entries are appended only for public releases.
//!
//! # Example
//!
//! ```toml
//! product_line = "Testware"
//! release = "v2021.07.01"
//! docs_url_template = "https://testware.dev/docs/%s"
//! kubernetes_version = "1.16+"
//!
//! [[groups]]
//! [groups.projects."github.com/testware/installer"]
//! tag_with_release = true
//! release_branch = "release-${TAG}"
//! chart_names = ["testware"]
//!
//! [[groups]]
//! [groups.projects."github.com/testware/charts"]
//! charts = ["github.com/testware/installer"]
//! changelog = "skip"
//! ```

use crate::core::error::{RelmanError, RelmanResult};
use crate::manifest::compose::{append_if, is_public_release};
use crate::manifest::model::{ChangelogPolicy, Project, ProjectGroup, Release};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A product's release shape, loaded from a TOML definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDefinition {
  /// Product line name (e.g., "Kubeform")
  pub product_line: String,

  /// Release version for the current cycle, before any prerelease suffix
  pub release: String,

  /// Docs URL template with exactly one %s placeholder
  pub docs_url_template: String,

  /// Supported Kubernetes version range
  #[serde(default)]
  pub kubernetes_version: String,

  /// Ordered group definitions; earlier groups are released first
  #[serde(default)]
  pub groups: Vec<GroupDefinition>,
}

/// One ordered group of mutually independent repositories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupDefinition {
  #[serde(default)]
  pub projects: BTreeMap<String, ProjectDefinition>,
}

/// Per-repository instructions as written in the definition file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDefinition {
  #[serde(default)]
  pub key: Option<String>,

  /// Literal tag; the prerelease suffix is appended at build time
  #[serde(default)]
  pub tag: Option<String>,

  /// Tag this repository with the release version itself
  #[serde(default)]
  pub tag_with_release: bool,

  #[serde(default)]
  pub release_branch: Option<String>,

  #[serde(default)]
  pub chart_names: Vec<String>,

  #[serde(default)]
  pub charts: Vec<String>,

  #[serde(default)]
  pub commands: Vec<String>,

  /// Commands appended only when the release carries no prerelease qualifier
  #[serde(default)]
  pub commands_if_public: Vec<String>,

  #[serde(default)]
  pub changelog: ChangelogPolicy,
}

impl ProductDefinition {
  /// Load a product definition from a TOML file
  pub fn load(path: &Path) -> RelmanResult<Self> {
    let content = fs::read_to_string(path).map_err(|e| RelmanError::Definition {
      path: path.to_path_buf(),
      message: format!("failed to read file: {}", e),
    })?;

    toml_edit::de::from_str(&content).map_err(|e| RelmanError::Definition {
      path: path.to_path_buf(),
      message: e.to_string(),
    })
  }

  /// Build a release manifest from this definition
  ///
  /// Pure: no I/O, no randomness. The same definition, version, and suffix
  /// always produce a structurally identical Release.
  pub fn build(&self, release_version: &str, prerelease_suffix: &str) -> Release {
    let release_number = format!("{}{}", release_version, prerelease_suffix);
    let public = is_public_release(&release_number);

    let projects = self
      .groups
      .iter()
      .map(|group_def| {
        group_def
          .projects
          .iter()
          .map(|(repo, def)| (repo.clone(), def.build(&release_number, prerelease_suffix, public)))
          .collect()
      })
      .collect();

    Release {
      product_line: self.product_line.clone(),
      release: release_number,
      docs_url_template: self.docs_url_template.clone(),
      kubernetes_version: self.kubernetes_version.clone(),
      projects,
    }
  }
}

impl ProjectDefinition {
  fn build(&self, release_number: &str, prerelease_suffix: &str, public: bool) -> Project {
    let tag = if self.tag_with_release {
      Some(release_number.to_string())
    } else {
      self
        .tag
        .as_ref()
        .map(|tag| format!("{}{}", tag, prerelease_suffix))
    };

    let mut commands = self.commands.clone();
    for extra in &self.commands_if_public {
      commands = append_if(commands, public, extra.clone());
    }

    Project {
      key: self.key.clone(),
      tag,
      release_branch: self.release_branch.clone(),
      chart_names: self.chart_names.clone(),
      charts: self.charts.clone(),
      commands,
      changelog: self.changelog,
    }
  }
}
