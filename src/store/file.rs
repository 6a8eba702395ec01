//! Profile kept as a JSON file on local disk

use crate::core::error::{Result, TrackerError};
use crate::profile::{export_profile, import_profile, ImportReport, Profile};
use crate::store::ProfileStore;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON file store using the export format
///
/// Writes go to a temporary sibling first and are renamed into place, so
/// a crash mid-save leaves the previous profile intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn atomic_write(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<ImportReport>> {
        if !self.path.exists() {
            tracing::debug!("No profile at {}", self.path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| {
            TrackerError::Persistence(format!("reading {}: {}", self.path.display(), e))
        })?;
        let report = import_profile(&content)?;
        tracing::info!("Loaded profile from {}", self.path.display());
        Ok(Some(report))
    }

    fn save(&self, profile: &Profile) -> Result<()> {
        let content = export_profile(profile)?;
        atomic_write(&self.path, &content).map_err(|e| {
            TrackerError::Persistence(format!("writing {}: {}", self.path.display(), e))
        })?;
        tracing::debug!("Saved profile to {}", self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
