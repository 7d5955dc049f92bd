//! File-based outcome markers
//!
//! Implements `MarkerWriter` by creating an empty file named after the
//! marker, which later CI steps test for.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::core::models::Marker;
use crate::core::ports::MarkerWriter;

/// Writes marker files into a directory
#[derive(Debug, Clone)]
pub struct FileMarkerWriter {
    dir: PathBuf,
}

impl FileMarkerWriter {
    /// Create a writer for a directory
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path a marker is written to
    #[must_use]
    pub fn path_for(&self, marker: Marker) -> PathBuf {
        self.dir.join(marker.file_name())
    }

    /// Directory markers are written to
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MarkerWriter for FileMarkerWriter {
    fn write(&self, marker: Marker) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let path = self.path_for(marker);
        fs::write(&path, "").with_context(|| format!("failed to write {}", path.display()))?;
        debug!("wrote marker {}", path.display());
        Ok(())
    }
}
