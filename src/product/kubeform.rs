//! Built-in product definition for the Kubeform provider/controller suite
//!
//! `build` is pure and deterministic: identical inputs always produce a
//! structurally identical Release. The prerelease suffix is applied to every
//! tag derived from the release cycle, so a dry-run build differs from a final
//! build only in version strings, never in group topology.

use crate::manifest::compose::{append_if, is_public_release};
use crate::manifest::model::{ChangelogPolicy, Project, ProjectGroup, Release};

/// Canonical release version for the current Kubeform release cycle
pub const DEFAULT_RELEASE_VERSION: &str = "v2021.07.01";

const PROVIDERS: [&str; 5] = ["aws", "azurerm", "google", "digitalocean", "linode"];

/// Build the Kubeform release manifest for one release cycle
pub fn build(release_version: &str, prerelease_suffix: &str) -> Release {
  let release_number = format!("{}{}", release_version, prerelease_suffix);
  let provider_tag = format!("v0.0.1{}", prerelease_suffix);
  let public = is_public_release(&release_number);

  let api_group: ProjectGroup = PROVIDERS
    .iter()
    .map(|provider| {
      (
        format!("github.com/kubeform/provider-{}-api", provider),
        Project {
          tag: Some(provider_tag.clone()),
          ..Default::default()
        },
      )
    })
    .collect();

  let controller_group: ProjectGroup = PROVIDERS
    .iter()
    .map(|provider| {
      (
        format!("github.com/kubeform/provider-{}-controller", provider),
        Project {
          key: Some(format!("kubeform-{}", provider)),
          tag: Some(provider_tag.clone()),
          chart_names: vec![format!("kubeform-provider-{}", provider)],
          ..Default::default()
        },
      )
    })
    .collect();

  let installer_group = ProjectGroup::new().with(
    "github.com/kubeform/installer",
    Project {
      key: Some("kubeform-installer".to_string()),
      tag: Some(release_number.clone()),
      release_branch: Some("release-${TAG}".to_string()),
      chart_names: PROVIDERS
        .iter()
        .map(|provider| format!("kubeform-provider-{}", provider))
        .collect(),
      commands: vec![
        "./hack/scripts/prepare-release.sh".to_string(),
        "./hack/scripts/update-chart-dependencies.sh".to_string(),
      ],
      ..Default::default()
    },
  );

  let charts_registry_group = ProjectGroup::new().with(
    "github.com/appscode/charts",
    Project {
      charts: vec!["github.com/kubeform/installer".to_string()],
      changelog: ChangelogPolicy::Skip,
      ..Default::default()
    },
  );

  // Must precede the main repo group so docs_changelog.md exists when the
  // main repo's command moves it into the docs tree.
  let static_assets_group = ProjectGroup::new().with(
    "github.com/appscode/static-assets",
    Project {
      commands: vec![
        "relman update-assets --release-file=${SCRIPT_ROOT}/releases/${RELEASE}/release.json --workspace=${WORKSPACE}"
          .to_string(),
      ],
      changelog: ChangelogPolicy::StandaloneWebsite,
      ..Default::default()
    },
  );

  let main_repo_group = ProjectGroup::new().with(
    "github.com/kubeform/kubeform",
    Project {
      key: Some("kubeform".to_string()),
      tag: Some(release_number.clone()),
      release_branch: Some("release-${TAG}".to_string()),
      commands: vec![
        "mv ${SCRIPT_ROOT}/releases/${RELEASE}/docs_changelog.md ${WORKSPACE}/docs/CHANGELOG-${RELEASE}.md"
          .to_string(),
      ],
      ..Default::default()
    },
  );

  let website_group = ProjectGroup::new().with(
    "github.com/kubeform/website",
    Project {
      tag: Some(release_number.clone()),
      release_branch: Some("master".to_string()),
      commands: append_if(
        vec![
          "make set-assets-repo ASSETS_REPO_URL=https://github.com/appscode/static-assets".to_string(),
          "make docs".to_string(),
        ],
        public,
        "make set-version VERSION=${TAG}",
      ),
      changelog: ChangelogPolicy::Skip,
      ..Default::default()
    },
  );

  let bundles_group = ProjectGroup::new().with(
    "github.com/kubeform/bundles",
    Project {
      tag: Some(release_number.clone()),
      release_branch: Some("release-${TAG}".to_string()),
      commands: vec![
        "relman update-bundles --release-file=${SCRIPT_ROOT}/releases/${RELEASE}/release.json --workspace=${WORKSPACE} --charts-dir=charts"
          .to_string(),
      ],
      ..Default::default()
    },
  );

  let bundle_registry_group = ProjectGroup::new().with(
    "github.com/bytebuilders/bundle-registry",
    Project {
      charts: vec!["github.com/kubeform/bundles".to_string()],
      changelog: ChangelogPolicy::Skip,
      ..Default::default()
    },
  );

  Release {
    product_line: "Kubeform".to_string(),
    release: release_number,
    docs_url_template: "https://kubeform.com/docs/%s".to_string(),
    kubernetes_version: "1.16+".to_string(),
    projects: vec![
      api_group,
      controller_group,
      installer_group,
      charts_registry_group,
      static_assets_group,
      main_repo_group,
      website_group,
      bundles_group,
      bundle_registry_group,
    ],
  }
}
