//! Byte stores for fetched icons.
//!
//! Entries are keyed by the icon URL and hold the raw fetched bytes. There is
//! no expiry: an entry stays until it is overwritten by a forced reload,
//! removed, or the store is cleared.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::targets;

/// A key-value store of raw bytes.
pub trait ByteStore: Send + Sync {
    /// Read the bytes stored under `key`.
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value.
    fn put(&self, key: &str, bytes: &[u8]) -> io::Result<()>;

    /// Remove the entry for `key`. Returns whether there was one.
    fn remove(&self, key: &str) -> io::Result<bool>;

    /// Check whether `key` has an entry.
    fn contains(&self, key: &str) -> bool;

    /// Remove every entry.
    fn clear(&self) -> io::Result<()>;
}

/// A store that keeps one file per key in a directory.
///
/// File names are a hash of the key, so any URL maps to a safe name.
#[derive(Debug, Clone)]
pub struct DiskStore {
    dir: PathBuf,
}

impl DiskStore {
    /// Open a store in `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(target: targets::CACHE, dir = %dir.display(), "opened disk store");
        Ok(Self { dir })
    }

    /// The directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file that holds `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(Self::hash_key(key))
    }

    /// Hash a key to create a safe filename.
    fn hash_key(key: &str) -> String {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

impl ByteStore for DiskStore {
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        // Readers never observe a partial entry.
        let mut file = tempfile::NamedTempFile::new_in(&self.dir)?;
        file.write_all(bytes)?;
        file.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.path_for(key).is_file()
    }

    fn clear(&self) -> io::Result<()> {
        for entry in fs::read_dir(&self.dir)?.flatten() {
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

/// A store that lives in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ByteStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        self.entries.write().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<bool> {
        Ok(self.entries.write().remove(key).is_some())
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    fn clear(&self) -> io::Result<()> {
        self.entries.write().clear();
        Ok(())
    }
}
