//! Integration tests for `relman create-release`

use crate::helpers::{TestDir, run_relman, run_relman_unchecked};
use anyhow::Result;

#[test]
fn test_create_release_emits_valid_json_manifest() -> Result<()> {
  let dir = TestDir::new()?;

  let output = run_relman(&dir.path, &["create-release"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  let manifest: serde_json::Value = serde_json::from_str(&stdout)?;
  assert_eq!(manifest["productLine"], "Kubeform");
  assert_eq!(manifest["release"], "v2021.07.01");
  assert_eq!(manifest["docsURLTemplate"], "https://kubeform.com/docs/%s");
  assert_eq!(manifest["kubernetesVersion"], "1.16+");

  let groups = manifest["projects"].as_array().expect("projects should be an array");
  assert_eq!(groups.len(), 9);

  Ok(())
}

#[test]
fn test_create_release_output_is_deterministic() -> Result<()> {
  let dir = TestDir::new()?;

  let first = run_relman(&dir.path, &["create-release"])?;
  let second = run_relman(&dir.path, &["create-release"])?;

  assert_eq!(first.stdout, second.stdout);

  Ok(())
}

#[test]
fn test_create_release_installer_precedes_charts_registry() -> Result<()> {
  let dir = TestDir::new()?;

  let output = run_relman(&dir.path, &["create-release"])?;
  let manifest: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;
  let groups = manifest["projects"].as_array().unwrap();

  let installer_idx = groups
    .iter()
    .position(|g| g.get("github.com/kubeform/installer").is_some())
    .expect("installer group missing");
  let registry_idx = groups
    .iter()
    .position(|g| {
      g.as_object().is_some_and(|projects| {
        projects.values().any(|p| {
          p["charts"]
            .as_array()
            .is_some_and(|charts| charts.iter().any(|c| c == "github.com/kubeform/installer"))
        })
      })
    })
    .expect("no group aggregates the installer chart");

  assert!(installer_idx < registry_idx);

  Ok(())
}

#[test]
fn test_create_release_prerelease_suffix() -> Result<()> {
  let dir = TestDir::new()?;

  let output = run_relman(&dir.path, &["create-release", "--prerelease", "-rc.1"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  let manifest: serde_json::Value = serde_json::from_str(&stdout)?;

  assert_eq!(manifest["release"], "v2021.07.01-rc.1");
  // Prerelease builds must not carry the public-only versioning step
  assert!(!stdout.contains("make set-version"));

  Ok(())
}

#[test]
fn test_create_release_public_has_set_version_command() -> Result<()> {
  let dir = TestDir::new()?;

  let output = run_relman(&dir.path, &["create-release"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("make set-version VERSION=${TAG}"));

  Ok(())
}

#[test]
fn test_create_release_writes_output_file() -> Result<()> {
  let dir = TestDir::new()?;

  run_relman(&dir.path, &["create-release", "--output", "release.json"])?;

  let content = dir.read_file("release.json")?;
  let manifest: serde_json::Value = serde_json::from_str(&content)?;
  assert_eq!(manifest["productLine"], "Kubeform");

  Ok(())
}

#[test]
fn test_create_release_from_definition_file() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file(
    "product.toml",
    r#"
product_line = "Testware"
release = "v2024.01.01"
docs_url_template = "https://testware.dev/docs/%s"
kubernetes_version = "1.25+"

[[groups]]
[groups.projects."github.com/testware/installer"]
tag_with_release = true
chart_names = ["testware"]

[[groups]]
[groups.projects."github.com/testware/charts"]
charts = ["github.com/testware/installer"]
changelog = "skip"
"#,
  )?;

  let output = run_relman(&dir.path, &["create-release", "--definition", "product.toml"])?;
  let manifest: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  assert_eq!(manifest["productLine"], "Testware");
  assert_eq!(manifest["release"], "v2024.01.01");
  assert_eq!(manifest["projects"].as_array().unwrap().len(), 2);

  Ok(())
}

#[test]
fn test_create_release_invalid_definition_aborts_without_output() -> Result<()> {
  let dir = TestDir::new()?;
  // Aggregator references a repository that is never defined
  dir.write_file(
    "product.toml",
    r#"
product_line = "Testware"
release = "v2024.01.01"
docs_url_template = "https://testware.dev/docs/%s"

[[groups]]
[groups.projects."github.com/testware/charts"]
charts = ["github.com/testware/missing"]
"#,
  )?;

  let output = run_relman_unchecked(
    &dir.path,
    &["create-release", "--definition", "product.toml", "--output", "release.json"],
  )?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(3));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("github.com/testware/missing"));
  // No partial manifest may be written
  assert!(!dir.path.join("release.json").exists());

  Ok(())
}

#[test]
fn test_create_release_missing_definition_file_is_user_error() -> Result<()> {
  let dir = TestDir::new()?;

  let output = run_relman_unchecked(&dir.path, &["create-release", "--definition", "absent.toml"])?;

  assert_eq!(output.status.code(), Some(1));

  Ok(())
}
