//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: reading and rewriting the connector definition
//!
//! The use case layer depends on these traits only, so it can be driven by
//! an in-memory store in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
