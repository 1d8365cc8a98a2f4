//! The fetch seam.

use std::sync::Arc;

use crate::error::Result;

/// Something that can turn a URL into bytes.
///
/// Implementations block until the bytes are available. The icon library
/// only ever calls this for cache misses and forced reloads.
pub trait Fetcher: Send + Sync {
    /// Fetch the full body at `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}
