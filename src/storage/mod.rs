//! Transports for the saved-state text blob. The simulation only produces
//! and consumes text; where it lives is decided here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::StoreError;

/// A single-slot key-value store for serialized simulation state.
pub trait StateStore {
    /// Replace the stored blob
    fn save(&mut self, blob: &str) -> Result<(), StoreError>;

    /// The last saved blob, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<String>, StoreError>;
}

/// Keeps the blob in a file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn save(&mut self, blob: &str) -> Result<(), StoreError> {
        fs::write(&self.path, blob)?;
        debug!("Wrote {} bytes to {}", blob.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the blob in memory; useful for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl StateStore for MemoryStore {
    fn save(&mut self, blob: &str) -> Result<(), StoreError> {
        self.blob = Some(blob.to_owned());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), None);
        store.save("one").unwrap();
        store.save("two").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!("torus_life_store_{}.json", std::process::id()));
        let mut store = FileStore::new(&path);
        assert_eq!(store.load().unwrap(), None);

        store.save("{\"grid\": [[1]]}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{\"grid\": [[1]]}"));
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_file_store_reports_io_errors() {
        let dir = std::env::temp_dir();
        let mut store = FileStore::new(dir.join("torus_life_missing_dir").join("nested").join("state.json"));
        assert!(matches!(store.save("x"), Err(StoreError::Io(_))));
    }
}
