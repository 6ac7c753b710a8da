//! Key-Value store wrapper with automatic serialization.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// A backend that stores JSON values by key.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;
    fn set(&self, key: &str, value: Value) -> Result<(), CacheError>;
    fn delete(&self, key: &str) -> Result<(), CacheError>;
    fn exists(&self, key: &str) -> Result<bool, CacheError>;
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

fn lock(entries: &Mutex<BTreeMap<String, Value>>) -> Result<MutexGuard<'_, BTreeMap<String, Value>>, CacheError> {
    entries
        .lock()
        .map_err(|_| CacheError::StoreError("store lock poisoned".to_string()))
}

/// An in-process store. Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CacheError> {
        lock(&self.entries)?.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        lock(&self.entries)?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(lock(&self.entries)?.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(lock(&self.entries)?.keys().cloned().collect())
    }
}

/// A store persisted as a single pretty-printed JSON object on disk.
///
/// The whole file is loaded on open and rewritten after every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Value>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    CacheError::OpenError(format!("{}: {}", path.display(), e))
                })?
            }
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, Value>) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    // Writes go to disk first; memory only changes once the flush succeeds.
    fn set(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let mut entries = lock(&self.entries)?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value);
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = lock(&self.entries)?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(lock(&self.entries)?.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(lock(&self.entries)?.keys().cloned().collect())
    }
}

/// Type-safe cache over a [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Clones share the same store.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn KvStore>,
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

impl Cache {
    /// A cache backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Open a cache persisted to a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::open(".dukaan/state.json")?;
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::with_store(FileStore::open(path)?))
    }

    /// Wrap a custom store.
    pub fn with_store(store: impl KvStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Cart> = cache.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Get a value, failing if the key is absent.
    pub fn require<T: DeserializeOwned>(&self, key: &str) -> Result<T, CacheError> {
        self.get(key)?
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let value = serde_json::to_value(value)?;
        self.store.set(key, value)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust
/// use dukaan_cache::cache_key;
///
/// let key = cache_key!("cookie", "dukaanLanguage");
/// assert_eq!(key, "cookie:dukaanLanguage");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Item {
        name: String,
        qty: u32,
    }

    #[test]
    fn test_memory_roundtrip() {
        let cache = Cache::in_memory();
        let item = Item {
            name: "kurta".into(),
            qty: 2,
        };
        cache.set("item:1", &item).unwrap();
        assert_eq!(cache.get::<Item>("item:1").unwrap(), Some(item));
        assert!(cache.exists("item:1").unwrap());

        cache.delete("item:1").unwrap();
        assert_eq!(cache.get::<Item>("item:1").unwrap(), None);
        assert!(cache.require::<Item>("item:1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_clones_share_store() {
        let cache = Cache::in_memory();
        let other = cache.clone();
        cache.set("a", &1u32).unwrap();
        assert_eq!(other.get::<u32>("a").unwrap(), Some(1));
        assert_eq!(other.keys().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let cache = Cache::open(&path).unwrap();
        cache.set("count", &3u32).unwrap();
        drop(cache);

        let reopened = Cache::open(&path).unwrap();
        assert_eq!(reopened.get::<u32>("count").unwrap(), Some(3));
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Cache::open(&path), Err(CacheError::OpenError(_))));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let unwritable = Cache::open(blocker.join("state.json")).unwrap();
        assert!(unwritable.set("count", &3u32).is_err());
        assert!(!unwritable.exists("count").unwrap());

        let path = dir.path().join("state.json");
        let cache = Cache::open(&path).unwrap();
        cache.set("count", &3u32).unwrap();
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        assert!(cache.delete("count").is_err());
        assert_eq!(cache.get::<u32>("count").unwrap(), Some(3));
    }

    #[test]
    fn test_wrong_type_is_serialize_error() {
        let cache = Cache::in_memory();
        cache.set("n", &"text").unwrap();
        assert!(matches!(
            cache.get::<u32>("n"),
            Err(CacheError::SerializeError(_))
        ));
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key!("session", "default"), "session:default");
        assert_eq!(cache_key!("order", 7, "lines"), "order:7:lines");
    }
}
