//! Fixed-key persistence for the profile record
//!
//! One serialized record lives under a fixed key in a directory-backed
//! key-value store. Loading is infallible by design: missing or unreadable
//! state means "no prior state" and yields the default profile, never an
//! error surfaced to the user. Saving reports real errors to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Profile;

/// Fixed key the profile record is stored under.
pub const STORE_KEY: &str = "portfolio_data";

/// Errors that can occur while writing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write profile store: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Directory-backed store holding the single profile record.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// Open a store rooted at the given directory.
    ///
    /// The directory is created lazily on first save.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the serialized record.
    pub fn key_path(&self) -> PathBuf {
        self.dir.join(format!("{STORE_KEY}.json"))
    }

    /// Load the stored profile, or the default profile when no prior state
    /// exists or the stored state fails to parse.
    pub fn load(&self) -> Profile {
        match fs::read_to_string(self.key_path()) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(profile) => profile,
                Err(e) => {
                    log::debug!("stored profile unreadable, starting fresh: {e}");
                    Profile::default()
                }
            },
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::debug!("profile store unreadable, starting fresh: {e}");
                }
                Profile::default()
            }
        }
    }

    /// Persist the profile under the fixed key.
    pub fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(profile)?;
        fs::write(self.key_path(), raw)?;
        Ok(())
    }

    /// The directory this store is rooted at.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeId;

    #[test]
    fn test_load_missing_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path().join("nonexistent"));
        assert_eq!(store.load(), Profile::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path());

        let mut profile = Profile::sample();
        profile.theme = ThemeId::Terminal;
        store.save(&profile).unwrap();

        assert_eq!(store.load(), profile);
    }

    #[test]
    fn test_load_corrupt_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path());
        std::fs::write(store.key_path(), "{ not json").unwrap();
        assert_eq!(store.load(), Profile::default());
    }
}
