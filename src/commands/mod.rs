//! CLI commands for relman
//!
//! - **create-release**: build the release manifest, validate it, and emit JSON
//! - **validate**: check an existing manifest file against every invariant
//!
//! Commands never emit a partial manifest: validation failures abort before any
//! manifest output is written.

pub mod create_release;
pub mod validate;

pub use create_release::run_create_release;
pub use validate::run_validate;
