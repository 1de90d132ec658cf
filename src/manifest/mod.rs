//! Release manifest core: data model, composition, validation, encoding
//!
//! The pipeline is linear: a product definition builds a `Release`, conditional
//! commands are resolved inline during construction, `validate` checks the
//! result, and `encode::marshal` hands deterministic JSON to the external
//! orchestrator. Every step is a pure function; nothing here performs I/O or
//! retains state between invocations.

pub mod compose;
pub mod encode;
pub mod model;
pub mod validate;
