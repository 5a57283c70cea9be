use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{StudioError, StudioResult};

/// Synchronous string key-value storage for persisted snapshots.
///
/// Reads distinguish "absent" (`Ok(None)`) from "unreadable" (`Err`); callers in the store
/// treat both as a missing layer.
pub trait Storage {
    /// Read the value under `key`.
    fn get(&self, key: &str) -> StudioResult<Option<String>>;
    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> StudioResult<()>;
}

/// In-memory storage for tests and embedding hosts that persist elsewhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut s = Self::default();
        s.entries.insert(key.into(), value.into());
        s
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StudioResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StudioResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// One JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at [`FileStorage::default_dir`].
    pub fn open_default() -> Self {
        Self::new(Self::default_dir())
    }

    /// `<config dir>/vstudio`, falling back to the home directory and then `.`.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vstudio")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> StudioResult<PathBuf> {
        let ok = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
            && !key.starts_with('.');
        if !ok {
            return Err(StudioError::storage(format!("invalid storage key \"{key}\"")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StudioResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("read '{}'", path.display()))
                .into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StudioResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create storage dir '{}'", self.dir.display()))?;
        std::fs::write(&path, value).with_context(|| format!("write '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/storage.rs"]
mod tests;
