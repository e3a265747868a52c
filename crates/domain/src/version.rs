// crates/domain/src/version.rs
use patch_version_shared_kernel::{DomainError, DomainResult, SanitizedVersion, VersionTag};

// ASCII digits only. `\d` would also match other Unicode digits.
regex!(TRIPLE r"[0-9]+\.[0-9]+\.[0-9]+");
regex!(DIGIT_RUN r"[0-9]+");

/// Whether `tag` contains a `major.minor.patch` numeric triple anywhere.
pub fn is_valid(tag: &str) -> bool {
    TRIPLE.is_match(tag)
}

/// Accept `tag` if it carries a numeric triple, e.g. `3.1.4`, `v3.1.4` or
/// `3.1.4-beta.7`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTag`] carrying the offending tag otherwise.
pub fn validate(tag: &str) -> DomainResult<VersionTag> {
    if is_valid(tag) {
        Ok(VersionTag::new(tag))
    } else {
        Err(DomainError::InvalidTag {
            tag: tag.to_string(),
        })
    }
}

/// Reduce a tag to its first three digit runs joined with `.`.
///
/// Anything the connector version field cannot represent (prefixes,
/// pre-release and build metadata, a fourth segment) is dropped. A tag with
/// fewer than three digit runs comes back unchanged.
pub fn sanitize(tag: &str) -> SanitizedVersion {
    let runs: Vec<&str> = DIGIT_RUN.find_iter(tag).take(3).map(|m| m.as_str()).collect();
    if runs.len() < 3 {
        SanitizedVersion::new(tag)
    } else {
        SanitizedVersion::new(runs.join("."))
    }
}
