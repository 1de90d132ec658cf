//! Core infrastructure for relman
//!
//! - **error**: Error types with contextual help messages and stable exit codes

pub mod error;
