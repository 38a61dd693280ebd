use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::errors::MarketDataError;
use crate::models::{IndexConstituent, IndexDescriptor};

/// Persisted constituent sets, one JSON file per index.
#[derive(Debug, Clone)]
pub struct SampleStore {
    dir: PathBuf,
}

impl SampleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, index: &IndexDescriptor) -> PathBuf {
        self.dir.join(format!("{}.json", index.sample_file_stem()))
    }

    /// Reads the persisted set. A missing file yields `Ok(None)`.
    pub fn load(
        &self,
        index: &IndexDescriptor,
    ) -> Result<Option<Vec<IndexConstituent>>, MarketDataError> {
        let path = self.path_for(index);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let constituents = serde_json::from_str(&content)?;
        Ok(Some(constituents))
    }

    /// Replaces the persisted set as a whole. Each writer goes through its own
    /// temporary file in the same directory, renamed into place.
    pub fn save(
        &self,
        index: &IndexDescriptor,
        constituents: &[IndexConstituent],
    ) -> Result<(), MarketDataError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(index);
        let json = serde_json::to_string_pretty(constituents)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&path).map_err(|e| e.error)?;

        debug!(
            "Persisted {} constituents to {}",
            constituents.len(),
            path.display()
        );
        Ok(())
    }
}
