//! Conditional command composition and the public-release predicate
//!
//! `append_if` keeps per-project command lists declarative: a versioning step
//! can be appended only when the release carries no prerelease qualifier,
//! without branching at every call site.

use semver::Version;

/// Append `extra` to `base` only when `condition` holds
///
/// Prior elements keep their relative order; the extra command always lands at
/// the end.
pub fn append_if(mut base: Vec<String>, condition: bool, extra: impl Into<String>) -> Vec<String> {
  if condition {
    base.push(extra.into());
  }
  base
}

/// Parse a release version under the manifest's version grammar
///
/// The grammar is semver with two relaxations the product's calendar versions
/// require: an optional leading "v", and leading zeros in the core numeric
/// components ("v2021.07.01"). Components are normalized before delegating to
/// the strict `semver` parser, so prerelease and build metadata keep exact
/// semver semantics.
pub fn parse_version(version: &str) -> Option<Version> {
  let rest = version.strip_prefix('v').unwrap_or(version);

  // Split the core triple from any prerelease/build tail
  let (core, tail) = match rest.find(['-', '+']) {
    Some(idx) => rest.split_at(idx),
    None => (rest, ""),
  };

  let mut normalized = Vec::with_capacity(3);
  for component in core.split('.') {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
      return None;
    }
    let trimmed = component.trim_start_matches('0');
    normalized.push(if trimmed.is_empty() { "0" } else { trimmed });
  }

  if normalized.len() != 3 {
    return None;
  }

  Version::parse(&format!(
    "{}.{}.{}{}",
    normalized[0], normalized[1], normalized[2], tail
  ))
  .ok()
}

/// Whether a release version denotes a public release
///
/// A version is public iff, after stripping an optional leading "v", it carries
/// no prerelease component ("-rc.1", "-beta", ...). Unparseable versions are
/// not public.
pub fn is_public_release(version: &str) -> bool {
  parse_version(version).is_some_and(|v| v.pre.is_empty())
}
