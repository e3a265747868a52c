// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, truncating existing content.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Replace the content of `path` with `data` in place.
    ///
    /// The file is opened for writing and truncated, so symlinks are followed
    /// and a target that cannot be opened for writing fails before anything
    /// is changed. Best-effort fsync once the data is flushed.
    pub fn rewrite<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let mut w = Self::create(path)?;
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        Ok(())
    }
}
