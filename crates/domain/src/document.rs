// crates/domain/src/document.rs
use patch_version_shared_kernel::SanitizedVersion;
use serde::Serialize;

use crate::marker::{MarkerPolicy, declaration};

/// What happened to the connector text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatchOutcome {
    /// `line` is 1-based; `previous` is the replaced line without its terminator.
    Patched { line: usize, previous: String },
    NoMatchFound,
}

impl PatchOutcome {
    pub fn is_patched(&self) -> bool {
        matches!(self, Self::Patched { .. })
    }
}

/// Connector text after patching, together with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedDocument {
    pub content: String,
    pub outcome: PatchOutcome,
}

/// Replace the first marker line of `content` with a declaration of `version`.
///
/// Every other byte is kept, including each line's own terminator. The
/// replaced line keeps its terminator, or gets `\n` if it was the last line
/// and had none. When no line matches, `content` is returned verbatim.
pub fn patch_text(
    content: &str,
    version: &SanitizedVersion,
    policy: &MarkerPolicy,
) -> PatchedDocument {
    let mut patched = String::with_capacity(content.len() + version.as_str().len());
    let mut outcome = PatchOutcome::NoMatchFound;

    for (index, raw) in content.split_inclusive('\n').enumerate() {
        let (body, terminator) = split_terminator(raw);
        if !outcome.is_patched() && policy.matches(body) {
            patched.push_str(&declaration(version.as_str()));
            patched.push_str(if terminator.is_empty() { "\n" } else { terminator });
            outcome = PatchOutcome::Patched {
                line: index + 1,
                previous: body.to_string(),
            };
        } else {
            patched.push_str(raw);
        }
    }

    PatchedDocument {
        content: patched,
        outcome,
    }
}

fn split_terminator(raw: &str) -> (&str, &str) {
    let body_len = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .map_or(raw.len(), str::len);
    raw.split_at(body_len)
}
