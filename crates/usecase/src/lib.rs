//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: validate a tag, sanitize it and patch the connector file
//! - [`dto`]: request and report types at the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{PatchReport, PatchRequest};
pub use orchestrator::PatchConnector;
