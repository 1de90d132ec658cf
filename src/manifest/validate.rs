//! Structural and referential validation over a completed Release
//!
//! Validation never fails fast: a single pass collects every violation so all
//! problems are reported at once. It is purely structural — command strings and
//! template placeholders are opaque at this layer.

use crate::manifest::compose::parse_version;
use crate::manifest::model::Release;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single invariant violation found in a release manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Violation {
  /// A required scalar field is empty
  MissingField { field: String },

  /// The release version does not match the version grammar
  InvalidVersion { version: String },

  /// The docs URL template does not contain exactly one placeholder
  InvalidTemplate { template: String },

  /// A project group defines zero projects
  EmptyGroup { group: usize },

  /// A repository identifier is defined in more than one group
  DuplicateProject {
    repo: String,
    first_group: usize,
    duplicate_group: usize,
  },

  /// A charts entry does not resolve to a strictly earlier group
  OrderingViolation {
    repo: String,
    group: usize,
    chart: String,
    chart_group: Option<usize>,
  },

  /// A project declares a tag that is present but empty
  InvalidTag { repo: String },
}

impl Violation {
  /// Suggested fix for this violation, if one is obvious
  pub fn suggestion(&self) -> Option<&'static str> {
    match self {
      Violation::OrderingViolation { .. } => {
        Some("Move the chart producer to an earlier group, or the aggregator to a later one.")
      }
      Violation::DuplicateProject { .. } => {
        Some("Each repository may appear in exactly one group; remove the extra entry.")
      }
      Violation::InvalidTag { .. } => {
        Some("Omit the tag entirely if this repository should not be tagged.")
      }
      _ => None,
    }
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Violation::MissingField { field } => {
        write!(f, "missing required field: {}", field)
      }
      Violation::InvalidVersion { version } => {
        write!(f, "release version '{}' does not match the version grammar", version)
      }
      Violation::InvalidTemplate { template } => {
        write!(
          f,
          "docs URL template '{}' must contain exactly one %s placeholder",
          template
        )
      }
      Violation::EmptyGroup { group } => {
        write!(f, "project group {} has no projects", group)
      }
      Violation::DuplicateProject {
        repo,
        first_group,
        duplicate_group,
      } => {
        write!(
          f,
          "repository '{}' is defined in group {} and again in group {}",
          repo, first_group, duplicate_group
        )
      }
      Violation::OrderingViolation {
        repo,
        group,
        chart,
        chart_group,
      } => match chart_group {
        Some(chart_group) => write!(
          f,
          "project '{}' in group {} aggregates charts from '{}' in group {}; chart producers must be in a strictly earlier group",
          repo, group, chart, chart_group
        ),
        None => write!(
          f,
          "project '{}' in group {} aggregates charts from unknown repository '{}'",
          repo, group, chart
        ),
      },
      Violation::InvalidTag { repo } => {
        write!(f, "project '{}' declares an empty tag", repo)
      }
    }
  }
}

/// Check every structural and referential invariant of a release manifest
///
/// Returns all violations found; an empty list means the manifest is valid.
pub fn validate(release: &Release) -> Vec<Violation> {
  let mut violations = Vec::new();

  if release.product_line.is_empty() {
    violations.push(Violation::MissingField {
      field: "productLine".to_string(),
    });
  }

  if parse_version(&release.release).is_none() {
    violations.push(Violation::InvalidVersion {
      version: release.release.clone(),
    });
  }

  if release.docs_url_template.matches("%s").count() != 1 {
    violations.push(Violation::InvalidTemplate {
      template: release.docs_url_template.clone(),
    });
  }

  // First pass: index each repository by the group that first defines it,
  // flagging duplicates along the way.
  let mut index: BTreeMap<&str, usize> = BTreeMap::new();
  for (group_idx, group) in release.projects.iter().enumerate() {
    if group.is_empty() {
      violations.push(Violation::EmptyGroup { group: group_idx });
    }

    for (repo, _) in group.iter() {
      if let Some(&first_group) = index.get(repo.as_str()) {
        violations.push(Violation::DuplicateProject {
          repo: repo.clone(),
          first_group,
          duplicate_group: group_idx,
        });
      } else {
        index.insert(repo.as_str(), group_idx);
      }
    }
  }

  // Second pass: per-project checks against the index
  for (group_idx, group) in release.projects.iter().enumerate() {
    for (repo, project) in group.iter() {
      if matches!(project.tag.as_deref(), Some("")) {
        violations.push(Violation::InvalidTag { repo: repo.clone() });
      }

      for chart in &project.charts {
        let chart_group = index.get(chart.as_str()).copied();
        if chart_group.is_none_or(|idx| idx >= group_idx) {
          violations.push(Violation::OrderingViolation {
            repo: repo.clone(),
            group: group_idx,
            chart: chart.clone(),
            chart_group,
          });
        }
      }
    }
  }

  violations
}
