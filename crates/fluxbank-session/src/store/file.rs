//! JSON-file identity store.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use fluxbank_core::{Identity, IdentityStore, StoreError};

/// Stem of the persisted record, shared with the hosted client's
/// local-storage key.
pub const RECORD_KEY: &str = "fluxbank_user";

/// File-backed store holding the single identity record as JSON.
///
/// Stands in for browser local storage: one record, synchronous I/O, single
/// writer. The record survives restarts; a missing file reads as no record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config location
    /// (`<config_dir>/fluxbank/fluxbank_user.json`).
    ///
    /// Returns `None` when the platform exposes no config directory.
    #[must_use]
    pub fn in_config_dir() -> Option<Self> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join("fluxbank").join(format!("{RECORD_KEY}.json"))))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityStore for JsonFileStore {
    fn load(&self) -> Result<Option<Identity>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, identity: &Identity) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(identity)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
