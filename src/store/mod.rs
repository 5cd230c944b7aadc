mod counter;

pub use counter::OrderCounter;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::RecordKind;

/// Flat-file storage: one CSV per record kind in a single directory.
/// Readers always see either the previous file or the new one in full.
pub struct DataStore {
    root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub filename: String,
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl DataStore {
    pub fn open(root: &Path) -> Result<Self> {
        std::fs::create_dir_all(root)
            .with_context(|| format!("Failed to create data directory: {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, kind: RecordKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    /// Replace the stored file for `kind` with `bytes` in one rename.
    pub fn replace(&self, kind: RecordKind, bytes: &[u8]) -> Result<()> {
        let dest = self.path_for(kind);
        write_atomic(&self.root, &dest, bytes)?;
        info!(%kind, path = %dest.display(), size = bytes.len(), "replaced data file");
        Ok(())
    }

    /// Size and modification time of the stored file, `None` if absent.
    pub fn info(&self, kind: RecordKind) -> Result<Option<FileInfo>> {
        let path = self.path_for(kind);
        let meta = match std::fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to stat {}", path.display()))
            }
        };
        let modified = meta
            .modified()
            .with_context(|| format!("No modification time for {}", path.display()))?;
        Ok(Some(FileInfo {
            filename: kind.file_name().to_string(),
            size: meta.len(),
            modified: DateTime::<Local>::from(modified),
        }))
    }
}

/// Write to a temp file beside `dest`, then rename it over `dest`.
pub(crate) fn write_atomic(dir: &Path, dest: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(bytes).context("Failed to write temp file")?;
    tmp.as_file().sync_all().context("Failed to flush temp file")?;
    tmp.persist(dest)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests;
