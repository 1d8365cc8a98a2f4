//! Fetch-or-reuse access to icons.

use std::collections::HashMap;
use std::sync::Arc;

use gridglyph_net::Fetcher;
use gridglyph_render::IconDocument;
use parking_lot::Mutex;

use crate::error::{IconError, Result};
use crate::registry::CollectionRegistry;
use crate::store::ByteStore;
use crate::targets;

/// Resolves `(collection, name)` pairs to parsed icons.
///
/// Bytes are fetched once per URL and kept in a [`ByteStore`]; later calls
/// reuse them unless a reload is forced. The library is shared freely
/// between threads: calls for the same URL are serialized, so concurrent
/// callers never fetch it twice at once, while different URLs proceed in
/// parallel.
pub struct IconLibrary {
    registry: CollectionRegistry,
    store: Arc<dyn ByteStore>,
    fetcher: Arc<dyn Fetcher>,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl IconLibrary {
    /// Create a library over the given collections, store and fetcher.
    pub fn new(
        registry: CollectionRegistry,
        store: Arc<dyn ByteStore>,
        fetcher: Arc<dyn Fetcher>,
    ) -> Self {
        Self {
            registry,
            store,
            fetcher,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The registered collections.
    pub fn registry(&self) -> &CollectionRegistry {
        &self.registry
    }

    /// The store holding fetched bytes.
    pub fn store(&self) -> &dyn ByteStore {
        self.store.as_ref()
    }

    /// Get an icon, fetching it when it is not stored or `force_reload` is set.
    ///
    /// A forced reload always fetches and overwrites the stored bytes; it is
    /// the only way to repair an entry that no longer parses.
    ///
    /// # Errors
    ///
    /// - [`IconError::UnknownCollection`] before anything is fetched
    /// - [`IconError::Fetch`] when the bytes are needed and cannot be fetched
    /// - [`IconError::Cache`] when the store cannot be read or written
    /// - [`IconError::Parse`] or [`IconError::MissingViewbox`] for unusable bytes
    pub fn get_icon(&self, collection: &str, name: &str, force_reload: bool) -> Result<IconDocument> {
        let url = self.registry.url_for(collection, name)?;
        let bytes = self.load(&url, force_reload)?;
        IconDocument::parse(&bytes).map_err(|e| IconError::from_document(&url, e))
    }

    /// Check whether an icon's bytes are stored.
    pub fn contains(&self, collection: &str, name: &str) -> Result<bool> {
        let url = self.registry.url_for(collection, name)?;
        Ok(self.store.contains(&url))
    }

    /// Drop an icon's stored bytes. Returns whether there were any.
    pub fn evict(&self, collection: &str, name: &str) -> Result<bool> {
        let url = self.registry.url_for(collection, name)?;
        Ok(self.with_url_lock(&url, || self.store.remove(&url))?)
    }

    /// Drop every stored icon.
    pub fn clear(&self) -> Result<()> {
        Ok(self.store.clear()?)
    }

    fn load(&self, url: &str, force_reload: bool) -> Result<Vec<u8>> {
        self.with_url_lock(url, || self.load_locked(url, force_reload))
    }

    fn load_locked(&self, url: &str, force_reload: bool) -> Result<Vec<u8>> {
        if !force_reload && let Some(bytes) = self.store.get(url)? {
            tracing::debug!(target: targets::LIBRARY, url, "cache hit");
            return Ok(bytes);
        }

        tracing::debug!(target: targets::LIBRARY, url, force_reload, "cache miss");
        let bytes = self.fetcher.fetch(url).map_err(|source| IconError::Fetch {
            url: url.to_string(),
            source,
        })?;
        self.store.put(url, &bytes)?;
        Ok(bytes)
    }

    /// Run `f` while holding the lock for `url`.
    ///
    /// Lock entries live only while someone holds or waits on them.
    fn with_url_lock<T>(&self, url: &str, f: impl FnOnce() -> T) -> T {
        let lock = Arc::clone(self.locks.lock().entry(url.to_string()).or_default());
        let result = {
            let _guard = lock.lock();
            f()
        };

        let mut locks = self.locks.lock();
        // Held by the map and by us only: nobody else is waiting.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(url);
        }
        result
    }
}

impl std::fmt::Debug for IconLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconLibrary")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use gridglyph_net::NetworkError;

    struct Failing;

    impl Fetcher for Failing {
        fn fetch(&self, _url: &str) -> gridglyph_net::Result<Vec<u8>> {
            Err(NetworkError::Timeout)
        }
    }

    #[test]
    fn cached_bytes_bypass_fetch_errors() {
        let store = Arc::new(MemoryStore::new());
        let library = IconLibrary::new(CollectionRegistry::default(), store.clone(), Arc::new(Failing));

        let url = library.registry().url_for("bootstrap", "star").unwrap();
        store.put(&url, br#"<svg viewBox="0 0 16 16"><path d="M0 0"/></svg>"#).unwrap();

        let icon = library.get_icon("bootstrap", "star", false).unwrap();
        assert_eq!(icon.paths().len(), 1);

        let err = library.get_icon("bootstrap", "star", true).unwrap_err();
        assert!(matches!(err, IconError::Fetch { .. }), "got {err:?}");
    }

    #[test]
    fn url_locks_are_released() {
        let store = Arc::new(MemoryStore::new());
        let library = Arc::new(IconLibrary::new(
            CollectionRegistry::default(),
            store.clone(),
            Arc::new(Failing),
        ));
        let url = library.registry().url_for("bootstrap", "star").unwrap();
        store.put(&url, br#"<svg viewBox="0 0 16 16"><path d="M0 0"/></svg>"#).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let library = Arc::clone(&library);
                std::thread::spawn(move || {
                    let _ = library.get_icon("bootstrap", "star", false);
                    let _ = library.get_icon("material", &format!("icon-{i}"), false);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(library.evict("bootstrap", "star").unwrap());

        assert!(library.locks.lock().is_empty());
    }

    #[test]
    fn library_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconLibrary>();
    }
}
