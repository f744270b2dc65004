//! Single-value snapshots stored under a fixed key.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{Cache, CacheError, Storage};

/// Envelope written to storage for every snapshot.
///
/// `revision` counts writes under the key. It is informational only: there is
/// no compare-and-swap, the last writer wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot<T> {
    /// Storage key the snapshot was written under.
    pub key: String,
    /// The persisted value.
    pub data: T,
    /// Number of writes under this key, starting at 1.
    pub revision: u64,
    /// When the snapshot was written (Unix timestamp, seconds).
    pub saved_at: i64,
}

/// Header-only view used to read the previous revision without decoding `data`.
#[derive(Deserialize)]
struct RevisionHeader {
    revision: u64,
}

/// A typed value persisted under one key.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_cache::{MemoryStore, Persisted};
///
/// let slot = Persisted::<Vec<String>, _>::new(MemoryStore::new(), "storefront:recent");
/// slot.save(&vec!["sku-1".to_string()])?;
/// assert_eq!(slot.load()?, Some(vec!["sku-1".to_string()]));
/// ```
#[derive(Debug, Clone)]
pub struct Persisted<T, S> {
    cache: Cache<S>,
    key: String,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, S> Persisted<T, S>
where
    T: Serialize + DeserializeOwned,
    S: Storage,
{
    /// Bind `key` on the given backend.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
            _phantom: PhantomData,
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored value, if any.
    pub fn load(&self) -> Result<Option<T>, CacheError> {
        Ok(self.load_snapshot()?.map(|s| s.data))
    }

    /// Load the full envelope including revision metadata.
    pub fn load_snapshot(&self) -> Result<Option<Snapshot<T>>, CacheError> {
        self.cache.get::<Snapshot<T>>(&self.key)
    }

    /// Write `data`, replacing the previous snapshot.
    ///
    /// Returns the revision that was written.
    pub fn save(&self, data: &T) -> Result<u64, CacheError> {
        let revision = self.current_revision() + 1;
        let snapshot = SnapshotRef {
            key: &self.key,
            data,
            revision,
            saved_at: chrono::Utc::now().timestamp(),
        };
        self.cache.set(&self.key, &snapshot)?;
        Ok(revision)
    }

    /// Remove the snapshot.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.delete(&self.key)
    }

    /// Check whether a snapshot exists.
    pub fn exists(&self) -> Result<bool, CacheError> {
        self.cache.exists(&self.key)
    }

    /// Borrow the underlying backend.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    // An unreadable previous snapshot restarts the count rather than blocking the write.
    fn current_revision(&self) -> u64 {
        self.cache
            .get::<RevisionHeader>(&self.key)
            .ok()
            .flatten()
            .map(|h| h.revision)
            .unwrap_or(0)
    }
}

/// Borrowing twin of [`Snapshot`] so saving doesn't clone the value.
#[derive(Serialize)]
struct SnapshotRef<'a, T> {
    key: &'a str,
    data: &'a T,
    revision: u64,
    saved_at: i64,
}
