//! Deterministic encoding of a Release to its JSON exchange format
//!
//! Struct field order is fixed by the model and group maps iterate in
//! lexicographic repository order, so structurally equal releases always
//! marshal to byte-identical output.

use crate::core::error::RelmanResult;
use crate::manifest::model::Release;

/// Encode a release manifest as pretty-printed JSON bytes
pub fn marshal(release: &Release) -> RelmanResult<Vec<u8>> {
  Ok(serde_json::to_vec_pretty(release)?)
}

/// Decode a release manifest from JSON bytes
pub fn unmarshal(data: &[u8]) -> RelmanResult<Release> {
  Ok(serde_json::from_slice(data)?)
}
