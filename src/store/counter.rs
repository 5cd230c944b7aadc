use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::write_atomic;

const COUNTER_FILE: &str = "consecutivo.txt";

/// Persisted order number. Each `next()` is a read, increment and atomic
/// rewrite; callers in different processes must not race on it.
pub struct OrderCounter {
    dir: PathBuf,
    path: PathBuf,
}

impl OrderCounter {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            path: dir.join(COUNTER_FILE),
        }
    }

    /// Last issued number; 0 if none was issued or the file is unreadable.
    pub fn current(&self) -> Result<u64> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };
        match text.trim().parse::<u64>() {
            Ok(n) => Ok(n),
            Err(_) => {
                warn!(path = %self.path.display(), "unparseable order counter, restarting at 0");
                Ok(0)
            }
        }
    }

    pub fn next(&self) -> Result<u64> {
        let next = self
            .current()?
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("Order counter overflow"))?;
        write_atomic(&self.dir, &self.path, next.to_string().as_bytes())?;
        debug!(order = next, "issued order number");
        Ok(next)
    }
}
