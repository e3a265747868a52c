// crates/ports/src/filesystem.rs
use std::path::Path;

use patch_version_shared_kernel::Result;

/// Port for whole-file text access.
pub trait TextStore: Send + Sync {
    /// Read the file at `path` as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Replace the content of the file at `path` with `content`.
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}
