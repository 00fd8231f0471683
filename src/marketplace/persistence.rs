use std::fs;
use std::io;
use std::path::PathBuf;

/// Key-value blob storage backing the catalog, the server-side stand-in for
/// the device-local storage a browser client would use. One blob per key,
/// written whole on every save.
pub trait ListingPersistence: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn save(&self, key: &str, blob: &str) -> Result<(), PersistenceError>;
}

/// Error enumeration for blob storage failures.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to read stored blob: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write blob: {0}")]
    Write(#[source] io::Error),
}

/// File-per-key JSON blobs under a root directory.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    root: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl ListingPersistence for JsonFilePersistence {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::Read(err)),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.root).map_err(PersistenceError::Write)?;
        fs::write(self.blob_path(key), blob).map_err(PersistenceError::Write)
    }
}
