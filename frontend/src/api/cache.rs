use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use log::debug;
use lru::LruCache;

use crate::config::Config;

/// Keeps fetched dataset bodies so switching views does not refetch static files
pub struct DatasetCache {
    entries: Mutex<LruCache<String, String>>,
}

impl DatasetCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn entries(&self) -> MutexGuard<'_, LruCache<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached body, or fetches and caches it. Failed fetches are not cached.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetcher: F) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        if let Some(body) = self.get(key) {
            debug!("Cache hit for {}", key);
            return Ok(body);
        }

        debug!("Cache miss for {}, fetching", key);
        let body = fetcher().await?;
        self.insert(key.to_string(), body.clone());
        Ok(body)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    pub fn insert(&self, key: String, body: String) {
        self.entries().put(key, body);
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries().clear();
    }
}

pub static DATASET_CACHE: LazyLock<DatasetCache> = LazyLock::new(|| DatasetCache::new(Config::get().cache_capacity));
