//! Disk-based session store.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::StoreError;
use super::store::{SessionKey, SessionRecord, SessionStore};

/// Stores one pretty-printed JSON file per session in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding session files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a session key.
    ///
    /// The user name is written as lowercase hex of its UTF-8 bytes, so
    /// distinct names never share a file and no name can leave the store
    /// directory, even on case-insensitive file systems.
    pub fn path_for(&self, key: &SessionKey) -> PathBuf {
        let mut user = String::with_capacity(key.user.len() * 2);
        for byte in key.user.bytes() {
            let _ = write!(user, "{byte:02x}");
        }
        self.dir
            .join(format!("{}_{}_{}.json", user, key.date, key.mode))
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self, key: &SessionKey) -> Result<Option<SessionRecord>, StoreError> {
        let path = self.path_for(key);
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, key: &SessionKey, record: &SessionRecord) -> Result<(), StoreError> {
        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&path, json)?;
        debug!(session = %key, path = %path.display(), "saved session");
        Ok(())
    }
}
