//! Integration tests for the icon library, using a counting fake fetcher.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use gridglyph_icons::{ByteStore, CollectionRegistry, DiskStore, IconError, IconLibrary, MemoryStore};
use gridglyph_net::Fetcher;

const STAR_V1: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2L2 22h20z"/></svg>"#;
const STAR_V2: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2L2 22h20z"/><path d="M0 0"/></svg>"#;

/// Serves successive bodies from a list and counts every fetch.
struct CountingFetcher {
    bodies: Vec<&'static str>,
    calls: AtomicUsize,
}

impl CountingFetcher {
    fn new(bodies: &[&'static str]) -> Arc<Self> {
        Arc::new(Self {
            bodies: bodies.to_vec(),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetcher for CountingFetcher {
    fn fetch(&self, _url: &str) -> gridglyph_net::Result<Vec<u8>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let body = self.bodies[call.min(self.bodies.len() - 1)];
        Ok(body.as_bytes().to_vec())
    }
}

/// Answers every request with 404 and remembers the requested URLs.
#[derive(Default)]
struct NotFoundFetcher {
    urls: parking_lot::Mutex<Vec<String>>,
}

impl Fetcher for NotFoundFetcher {
    fn fetch(&self, url: &str) -> gridglyph_net::Result<Vec<u8>> {
        self.urls.lock().push(url.to_string());
        Err(gridglyph_net::NetworkError::HttpStatus {
            status: 404,
            message: Some("Not Found".to_string()),
        })
    }
}

fn library(store: Arc<dyn ByteStore>, fetcher: Arc<CountingFetcher>) -> IconLibrary {
    IconLibrary::new(CollectionRegistry::default(), store, fetcher)
}

#[test]
fn test_second_get_uses_cache() {
    let fetcher = CountingFetcher::new(&[STAR_V1]);
    let library = library(Arc::new(MemoryStore::new()), fetcher.clone());

    let first = library.get_icon("material", "star", false).unwrap();
    let second = library.get_icon("material", "star", false).unwrap();

    assert_eq!(fetcher.calls(), 1);
    assert_eq!(first, second);
    assert!(library.contains("material", "star").unwrap());
}

#[test]
fn test_forced_reload_fetches_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(DiskStore::new(dir.path()).unwrap());
    let fetcher = CountingFetcher::new(&[STAR_V1, STAR_V2]);
    let library = library(store.clone(), fetcher.clone());

    let first = library.get_icon("material", "star", false).unwrap();
    let reloaded = library.get_icon("material", "star", true).unwrap();

    assert_eq!(fetcher.calls(), 2);
    assert_eq!(first.paths().len(), 1);
    assert_eq!(reloaded.paths().len(), 2);

    let url = library.registry().url_for("material", "star").unwrap();
    assert_eq!(store.get(&url).unwrap().unwrap(), STAR_V2.as_bytes());

    // The overwritten entry is what later calls see.
    let cached = library.get_icon("material", "star", false).unwrap();
    assert_eq!(cached, reloaded);
    assert_eq!(fetcher.calls(), 2);
}

#[test]
fn test_unknown_collection_does_not_fetch() {
    let fetcher = CountingFetcher::new(&[STAR_V1]);
    let library = library(Arc::new(MemoryStore::new()), fetcher.clone());

    let err = library.get_icon("nonexistent", "x", false).unwrap_err();
    assert!(matches!(err, IconError::UnknownCollection(ref c) if c == "nonexistent"));
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn test_corrupt_entry_needs_forced_reload() {
    let store = Arc::new(MemoryStore::new());
    let fetcher = CountingFetcher::new(&[STAR_V1]);
    let library = library(store.clone(), fetcher.clone());

    let url = library.registry().url_for("bootstrap", "star").unwrap();
    store.put(&url, b"<svg viewBox=").unwrap();

    let err = library.get_icon("bootstrap", "star", false).unwrap_err();
    assert!(matches!(err, IconError::Parse { .. }), "got {err:?}");
    assert_eq!(fetcher.calls(), 0);

    library.get_icon("bootstrap", "star", true).unwrap();
    library.get_icon("bootstrap", "star", false).unwrap();
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_missing_viewbox() {
    let fetcher = CountingFetcher::new(&[r#"<svg width="24" height="24"><path d="M0 0"/></svg>"#]);
    let library = library(Arc::new(MemoryStore::new()), fetcher);

    let err = library.get_icon("octicons", "star", false).unwrap_err();
    assert!(matches!(err, IconError::MissingViewbox { .. }), "got {err:?}");
}

#[test]
fn test_evict_forces_refetch() {
    let fetcher = CountingFetcher::new(&[STAR_V1]);
    let library = library(Arc::new(MemoryStore::new()), fetcher.clone());

    library.get_icon("boxicons", "star", false).unwrap();
    assert!(library.evict("boxicons", "star").unwrap());
    assert!(!library.evict("boxicons", "star").unwrap());
    library.get_icon("boxicons", "star", false).unwrap();

    assert_eq!(fetcher.calls(), 2);
}

#[test]
fn test_concurrent_gets_fetch_once() {
    let fetcher = CountingFetcher::new(&[STAR_V1]);
    let library = Arc::new(library(Arc::new(MemoryStore::new()), fetcher.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let library = Arc::clone(&library);
            thread::spawn(move || library.get_icon("material", "star", false).map(|_| ()))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_template_without_placeholder_fails_at_fetch() {
    let fetcher = Arc::new(NotFoundFetcher::default());
    let registry = CollectionRegistry::default().with("flat", "https://example.com/icon.svg");
    let library = IconLibrary::new(registry, Arc::new(MemoryStore::new()), fetcher.clone());

    let err = library.get_icon("flat", "star", false).unwrap_err();
    assert!(
        matches!(err, IconError::Fetch { ref url, .. } if url == "https://example.com/icon.svg"),
        "got {err:?}"
    );
    assert_eq!(*fetcher.urls.lock(), ["https://example.com/icon.svg"]);
    assert!(!library.contains("flat", "star").unwrap());
}
