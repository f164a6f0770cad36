//! Admin session state: one API key, persisted to durable storage.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Debug, Formatter};
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

use crate::StorageError;

/// Storage key holding the raw API key.
pub const API_KEY_STORAGE_KEY: &str = "apiKey";

/// Durable string key-value storage.
pub trait CredentialStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON-object file storage. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_string_pretty(entries)?;
        write_owner_only(&self.path, payload.as_bytes())?;
        Ok(())
    }
}

/// Write `contents`, leaving the file readable by its owner only on Unix.
fn write_owner_only(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    // `mode` only applies when the file is created.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(contents)
}

impl CredentialStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&entries)
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .lock()
            .expect("memory storage lock is not poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("memory storage lock is not poisoned")
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("memory storage lock is not poisoned")
            .remove(key);
        Ok(())
    }
}

/// Current admin API key plus its write-through storage.
///
/// Clones share the same state. The key itself is never validated here;
/// the admin transport checks it at dispatch time.
#[derive(Clone)]
pub struct CredentialStore {
    api_key: Arc<RwLock<Option<String>>>,
    storage: Arc<dyn CredentialStorage>,
}

impl Debug for CredentialStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl CredentialStore {
    /// Create an empty store. Call [`CredentialStore::load_from_storage`]
    /// to pick up a previous session, or use [`CredentialStore::restore`].
    pub fn new(storage: Arc<dyn CredentialStorage>) -> Self {
        Self {
            api_key: Arc::new(RwLock::new(None)),
            storage,
        }
    }

    /// Create a store and load any persisted key.
    pub fn restore(storage: Arc<dyn CredentialStorage>) -> Result<Self, StorageError> {
        let store = Self::new(storage);
        store.load_from_storage()?;
        Ok(store)
    }

    /// Store backed only by memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn login(&self, key: impl Into<String>) -> Result<(), StorageError> {
        let key = key.into();
        self.storage.set(API_KEY_STORAGE_KEY, &key)?;
        *self.write_key() = Some(key);
        debug!("admin session stored");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove(API_KEY_STORAGE_KEY)?;
        *self.write_key() = None;
        debug!("admin session cleared");
        Ok(())
    }

    /// Read a persisted key into memory. Nothing stored leaves memory as is.
    pub fn load_from_storage(&self) -> Result<(), StorageError> {
        if let Some(stored) = self
            .storage
            .get(API_KEY_STORAGE_KEY)?
            .filter(|value| !value.is_empty())
        {
            *self.write_key() = Some(stored);
        }
        Ok(())
    }

    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .read()
            .expect("credential lock is not poisoned")
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_key
            .read()
            .expect("credential lock is not poisoned")
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }

    fn write_key(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.api_key
            .write()
            .expect("credential lock is not poisoned")
    }
}
