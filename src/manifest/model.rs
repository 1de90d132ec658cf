//! Release manifest data model
//!
//! A `Release` describes one coordinated, multi-repository release cycle: product
//! metadata plus an ordered sequence of `ProjectGroup`s. Group order is
//! semantically meaningful — it encodes the dependency/build order the external
//! orchestrator must respect. Projects inside one group are mutually independent
//! and may be processed in parallel.
//!
//! The whole structure is immutable once built: the builder constructs it in one
//! pass, the validator and serializer only read it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete release manifest for one product/release cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
  /// Named software family this manifest describes (e.g., "Kubeform")
  pub product_line: String,

  /// Release version, optionally "v"-prefixed, optionally carrying a
  /// prerelease suffix (e.g., "v2021.07.01-rc.1")
  pub release: String,

  /// Docs URL template with exactly one substitution placeholder
  #[serde(rename = "docsURLTemplate")]
  pub docs_url_template: String,

  /// Supported Kubernetes version range (free-form)
  pub kubernetes_version: String,

  /// Ordered sequence of project groups; earlier groups are released first
  pub projects: Vec<ProjectGroup>,
}

impl Release {
  /// Find the group index of a repository identifier, if it is defined anywhere
  /// in the manifest. First occurrence wins when duplicates exist.
  pub fn group_index_of(&self, repo: &str) -> Option<usize> {
    self
      .projects
      .iter()
      .position(|group| group.contains_key(repo))
  }
}

/// A set of mutually independent projects processed together
///
/// Backed by a `BTreeMap` so iteration (and therefore serialization) is always
/// lexicographic by repository identifier, regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectGroup(BTreeMap<String, Project>);

impl ProjectGroup {
  /// Create an empty group
  pub fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Add a project under a repository identifier (e.g., "github.com/org/repo")
  pub fn insert(&mut self, repo: impl Into<String>, project: Project) {
    self.0.insert(repo.into(), project);
  }

  /// Builder-style insert for literal group definitions
  pub fn with(mut self, repo: impl Into<String>, project: Project) -> Self {
    self.insert(repo, project);
    self
  }

  /// Whether this group defines the given repository identifier
  pub fn contains_key(&self, repo: &str) -> bool {
    self.0.contains_key(repo)
  }

  /// Look up a project by repository identifier
  pub fn get(&self, repo: &str) -> Option<&Project> {
    self.0.get(repo)
  }

  /// Iterate projects in lexicographic repository order
  pub fn iter(&self) -> impl Iterator<Item = (&String, &Project)> {
    self.0.iter()
  }

  /// Number of projects in this group
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Whether this group has no projects
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl FromIterator<(String, Project)> for ProjectGroup {
  fn from_iter<I: IntoIterator<Item = (String, Project)>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

/// Per-repository release instructions
///
/// Optional scalar fields distinguish "absent" from "present but empty": an
/// absent tag means no tag is created for this release, while an explicitly
/// empty tag is a validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  /// Short identifier; defaults to the last segment of the repository identifier
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,

  /// Tag to create; equal to the release version means "tag with the release"
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag: Option<String>,

  /// Release branch template, may embed a "${TAG}" placeholder
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub release_branch: Option<String>,

  /// Names of the packaging artifacts (charts) this project produces
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub chart_names: Vec<String>,

  /// Repository identifiers whose charts this project aggregates; every entry
  /// must resolve to a strictly earlier group
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub charts: Vec<String>,

  /// Command templates run by the external orchestrator, in order
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub commands: Vec<String>,

  /// Changelog policy for this repository
  #[serde(default, skip_serializing_if = "ChangelogPolicy::is_generate")]
  pub changelog: ChangelogPolicy,
}

impl Project {
  /// Effective short identifier: the explicit key, or the last path segment of
  /// the repository identifier
  pub fn effective_key<'a>(&'a self, repo: &'a str) -> &'a str {
    match &self.key {
      Some(key) => key.as_str(),
      None => repo.rsplit('/').next().unwrap_or(repo),
    }
  }
}

/// Per-project directive controlling release-note generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangelogPolicy {
  /// Generate a changelog for this repository (the default, omitted from JSON)
  #[default]
  #[serde(rename = "generate")]
  Generate,

  /// Skip changelog generation entirely
  #[serde(rename = "skip")]
  Skip,

  /// Changelog is published on a standalone website instead
  #[serde(rename = "standaloneWebsite")]
  StandaloneWebsite,
}

impl ChangelogPolicy {
  /// Whether this is the default policy (used to omit it during serialization)
  pub fn is_generate(&self) -> bool {
    matches!(self, ChangelogPolicy::Generate)
  }
}
