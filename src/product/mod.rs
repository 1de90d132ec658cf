//! Product definitions: what gets released, in which order
//!
//! - **kubeform**: the built-in canonical definition for the Kubeform suite
//! - **definition**: TOML-backed definitions so new product lines ship as data

pub mod definition;
pub mod kubeform;
