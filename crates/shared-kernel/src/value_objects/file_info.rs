// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

/// Location of the connector definition being patched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.0.clone()
    }

    /// Resolve a relative path against `base`; absolute paths are returned as-is.
    #[must_use]
    pub fn resolve_against(&self, base: &Path) -> Self {
        if self.0.is_absolute() {
            self.clone()
        } else {
            Self(base.join(&self.0))
        }
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
