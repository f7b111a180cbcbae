//! # Reference Tokenizer Cache

use core::fmt::Debug;
use std::{num::NonZeroUsize, sync::Arc};

use parking_lot::{Mutex, RwLock};

use crate::{
    errors::TCResult,
    reference::{ReferenceLoader, ReferenceTokenizer},
    types::TCHashMap,
};

/// Eviction policy for a [`ReferenceCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheCapacity {
    /// Keep every loaded tokenizer for the life of the cache.
    #[default]
    Unbounded,

    /// Keep at most `n` tokenizers, evicting the least recently used.
    Lru(NonZeroUsize),
}

enum CacheStore {
    Unbounded(TCHashMap<String, Arc<dyn ReferenceTokenizer>>),
    Lru(hashlru::Cache<String, Arc<dyn ReferenceTokenizer>>),
}

impl CacheStore {
    fn new(capacity: CacheCapacity) -> Self {
        match capacity {
            CacheCapacity::Unbounded => Self::Unbounded(Default::default()),
            CacheCapacity::Lru(n) => Self::Lru(hashlru::Cache::new(n.get())),
        }
    }

    fn get(
        &mut self,
        key: &str,
    ) -> Option<Arc<dyn ReferenceTokenizer>> {
        match self {
            Self::Unbounded(map) => map.get(key).cloned(),
            Self::Lru(lru) => lru.get(&key.to_string()).cloned(),
        }
    }

    fn insert(
        &mut self,
        key: String,
        tokenizer: Arc<dyn ReferenceTokenizer>,
    ) {
        match self {
            Self::Unbounded(map) => {
                map.insert(key, tokenizer);
            }
            Self::Lru(lru) => {
                lru.insert(key, tokenizer);
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Unbounded(map) => map.len(),
            Self::Lru(lru) => lru.len(),
        }
    }
}

/// Load-once cache of [`ReferenceTokenizer`]s, keyed by model id.
///
/// Populated lazily through a [`ReferenceLoader`]. Concurrent requests
/// for a missing model load it once; hits never wait on a load.
pub struct ReferenceCache {
    loader: Arc<dyn ReferenceLoader>,
    capacity: CacheCapacity,

    store: RwLock<CacheStore>,

    /// Serializes loads.
    load_lock: Mutex<()>,
}

impl Debug for ReferenceCache {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ReferenceCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

impl ReferenceCache {
    /// Create an unbounded cache over `loader`.
    pub fn new<L>(loader: L) -> Self
    where
        L: ReferenceLoader + 'static,
    {
        Self::from_shared(Arc::new(loader))
    }

    /// Create an unbounded cache over a shared loader.
    pub fn from_shared(loader: Arc<dyn ReferenceLoader>) -> Self {
        Self {
            loader,
            capacity: CacheCapacity::Unbounded,
            store: RwLock::new(CacheStore::new(CacheCapacity::Unbounded)),
            load_lock: Mutex::new(()),
        }
    }

    /// Set the eviction policy and return the cache.
    ///
    /// Drops any tokenizers already cached.
    pub fn with_capacity(
        mut self,
        capacity: CacheCapacity,
    ) -> Self {
        self.capacity = capacity;
        self.store = RwLock::new(CacheStore::new(capacity));
        self
    }

    /// Get the eviction policy.
    pub fn capacity(&self) -> CacheCapacity {
        self.capacity
    }

    /// Get the loader.
    pub fn loader(&self) -> &Arc<dyn ReferenceLoader> {
        &self.loader
    }

    /// Number of cached tokenizers.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached tokenizers.
    pub fn clear(&self) {
        *self.store.write() = CacheStore::new(self.capacity);
    }

    fn lookup(
        &self,
        key: &str,
    ) -> Option<Arc<dyn ReferenceTokenizer>> {
        match &*self.store.read() {
            CacheStore::Unbounded(map) => return map.get(key).cloned(),
            CacheStore::Lru(_) => {}
        }
        // LRU lookups update recency.
        self.store.write().get(key)
    }

    /// Is `model_id` cached?
    ///
    /// For [`CacheCapacity::Lru`] caches this counts as a use.
    pub fn contains(
        &self,
        model_id: &str,
    ) -> bool {
        self.lookup(model_id).is_some()
    }

    /// Get the tokenizer for `model_id`, loading it on a miss.
    ///
    /// A failed load caches nothing; the next call retries.
    pub fn get_or_load(
        &self,
        model_id: &str,
    ) -> TCResult<Arc<dyn ReferenceTokenizer>> {
        if let Some(tokenizer) = self.lookup(model_id) {
            log::debug!("reference cache hit: {model_id}");
            return Ok(tokenizer);
        }

        let _guard = self.load_lock.lock();
        if let Some(tokenizer) = self.lookup(model_id) {
            log::debug!("reference cache hit after wait: {model_id}");
            return Ok(tokenizer);
        }

        log::debug!("reference cache miss, loading: {model_id}");
        let tokenizer = self.loader.load(model_id)?;
        self.store
            .write()
            .insert(model_id.to_string(), tokenizer.clone());
        Ok(tokenizer)
    }
}
