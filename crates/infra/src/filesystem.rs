// crates/infra/src/filesystem.rs
use std::path::Path;

use log::debug;
use patch_version_ports::filesystem::TextStore;
use patch_version_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// [`TextStore`] backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTextStore;

impl FsTextStore {
    pub fn new() -> Self {
        Self
    }
}

impl TextStore for FsTextStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        let text = FileReader::read_to_string(path).map_err(|source| {
            InfrastructureError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!("read {} bytes from {}", text.len(), path.display());
        Ok(text)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        FileWriter::rewrite(path, content.as_bytes()).map_err(|source| {
            InfrastructureError::FileWrite {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!("wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}
