//! Key-Value Storage
//!
//! String keys to string values, the same contract as browser local storage.
//! Repositories keep whole collections as JSON blobs under fixed keys and
//! receive the store by injection (`Arc<S>`), so tests can use
//! [`MemoryStore`] while the server persists with [`FileStore`].
//!
//! Individual calls are atomic. Read-modify-write sequences spanning several
//! calls are not: the last writer wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value store trait
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Value stored under `key`, if any
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: String) -> StorageResult<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn remove_item(&self, key: &str) -> StorageResult<()>;
}

// ============================================================================
// JSON helpers
// ============================================================================

/// Read and decode a JSON value.
///
/// A blob that fails to decode is reported as `Ok(None)` after a warning:
/// the front end may have written something this version does not understand,
/// and callers fall back to their empty default.
pub async fn read_json<S, T>(store: &S, key: &str) -> StorageResult<Option<T>>
where
    S: KeyValueStore + Send + Sync,
    T: DeserializeOwned,
{
    let Some(raw) = store.get_item(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unreadable stored value");
            Ok(None)
        }
    }
}

/// Encode a value as JSON and store it.
pub async fn write_json<S, T>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    S: KeyValueStore + Send + Sync,
    T: Serialize + Sync,
{
    let raw = serde_json::to_string(value)?;
    store.set_item(key, raw).await
}

// ============================================================================
// In-memory store
// ============================================================================

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> StorageResult<()> {
        self.items.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

// ============================================================================
// File-backed store
// ============================================================================

/// Store persisted as one JSON object on disk.
///
/// The file is read once on [`FileStore::open`] and rewritten after every
/// mutation (temp file + rename, so a crash never leaves a torn file).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    pub async fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        let items = match tokio::fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(path = %path.display(), keys = items.len(), "Opened file store");

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    async fn flush(&self, items: &BTreeMap<String, String>) -> StorageResult<()> {
        let raw = serde_json::to_vec_pretty(items)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> StorageResult<()> {
        // Lock held across the flush so writes hit the disk in order.
        let mut items = self.items.lock().await;
        let mut next = items.clone();
        next.insert(key.to_string(), value);
        self.flush(&next).await?;
        *items = next;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        let mut items = self.items.lock().await;
        if !items.contains_key(key) {
            return Ok(());
        }
        let mut next = items.clone();
        next.remove(key);
        self.flush(&next).await?;
        *items = next;
        Ok(())
    }
}
