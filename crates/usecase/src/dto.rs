// crates/usecase/src/dto.rs
use patch_version_domain::{MarkerPolicy, PatchOutcome};
use patch_version_shared_kernel::{FilePath, SanitizedVersion, VersionTag};
use serde::Serialize;

/// Everything the patch use case needs for one run.
#[derive(Debug, Clone)]
pub struct PatchRequest {
    /// Raw tag; validated by the use case.
    pub tag: String,
    pub target: FilePath,
    pub policy: MarkerPolicy,
    /// Treat a file without a marker line as an error.
    pub require_match: bool,
    /// Patch in memory only.
    pub dry_run: bool,
}

impl PatchRequest {
    pub fn new(tag: impl Into<String>, target: impl Into<FilePath>) -> Self {
        Self {
            tag: tag.into(),
            target: target.into(),
            policy: MarkerPolicy::default(),
            require_match: false,
            dry_run: false,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub tag: VersionTag,
    pub version: SanitizedVersion,
    pub target: FilePath,
    pub outcome: PatchOutcome,
    /// Whether the file on disk was rewritten.
    pub written: bool,
}
