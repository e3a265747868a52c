// crates/domain/src/marker.rs
use patch_version_shared_kernel::{DomainError, DomainResult};

/// Version literal the connector template ships with.
pub const DEFAULT_PLACEHOLDER: &str = "3.0.0";

regex!(ANY_DECLARATION r#"\[Version = "[^"\r\n]*"\]"#);

/// The version record as it appears in a connector definition.
pub fn declaration(version: &str) -> String {
    format!("[Version = \"{version}\"]")
}

/// Rule deciding which line of the connector file carries the version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerPolicy {
    /// Only a declaration holding exactly `placeholder` qualifies.
    Exact { placeholder: String },
    /// Any `[Version = "..."]` declaration qualifies, whatever its value.
    AnyValue,
}

impl MarkerPolicy {
    /// Exact policy for `placeholder`.
    ///
    /// # Errors
    ///
    /// Fails when the placeholder could never appear inside a single-line
    /// quoted declaration.
    pub fn exact(placeholder: impl Into<String>) -> DomainResult<Self> {
        let placeholder = placeholder.into();
        if let Some(bad) = placeholder.chars().find(|c| matches!(c, '"' | '\n' | '\r')) {
            return Err(DomainError::InvalidPlaceholder {
                reason: format!("contains {bad:?}"),
                placeholder,
            });
        }
        Ok(Self::Exact { placeholder })
    }

    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::Exact { placeholder } => line.contains(&declaration(placeholder)),
            Self::AnyValue => ANY_DECLARATION.is_match(line),
        }
    }
}

impl Default for MarkerPolicy {
    fn default() -> Self {
        Self::Exact {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}
