// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod version;

pub use file_info::FilePath;
pub use version::{SanitizedVersion, VersionTag};
