//! # Domain
//!
//! Pure rules of the version patcher: which tags are acceptable, how a tag is
//! reduced to the three-segment form the connector accepts, and how the marker
//! line of a connector definition is located and rewritten.
//!
//! Nothing in this crate performs I/O.

#![allow(clippy::multiple_crate_versions)]

macro_rules! regex {
    ($name:ident $pattern:expr) => {
        static $name: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
            regex::Regex::new($pattern).expect("static pattern compiles")
        });
    };
}

pub mod document;
pub mod marker;
pub mod version;

pub use document::{PatchOutcome, PatchedDocument, patch_text};
pub use marker::{DEFAULT_PLACEHOLDER, MarkerPolicy, declaration};
pub use version::{is_valid, sanitize, validate};
