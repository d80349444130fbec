// src/workspace.rs
//! Scratch directory for one export run: the rendered HTML source goes in,
//! the PDF artifact comes out, and the directory is removed afterwards.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct ExportWorkspace {
    dir: PathBuf,
}

impl ExportWorkspace {
    /// Create a fresh workspace directory under the given root.
    pub fn prepare(root: &Path) -> Result<Self> {
        let dir = root.join(format!(
            "export_{}",
            chrono::Utc::now().format("%Y%m%d_%H%M%S_%f")
        ));
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn source_path(&self) -> PathBuf {
        self.dir.join("cv.html")
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.dir.join("cv.pdf")
    }

    pub fn write_source(&self, html: &str) -> Result<()> {
        fs::write(self.source_path(), html)?;
        Ok(())
    }

    pub fn read_artifact(&self) -> Result<Vec<u8>> {
        Ok(fs::read(self.artifact_path())?)
    }

    /// Remove the workspace. A failed removal is logged, not fatal; the
    /// export result has already been read by then.
    pub fn cleanup(self) {
        if let Err(e) = fs::remove_dir_all(&self.dir) {
            warn!(
                "Failed to clean up export workspace {}: {}",
                self.dir.display(),
                e
            );
        }
    }
}
