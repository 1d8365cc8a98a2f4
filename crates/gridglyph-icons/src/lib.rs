//! Icon collections, fetching and caching for gridglyph.
//!
//! An icon is named by a collection and an icon name. The
//! [`CollectionRegistry`] turns the pair into a URL, the [`IconLibrary`]
//! returns the stored bytes for that URL or fetches them, and the bytes are
//! parsed into an [`IconDocument`](gridglyph_render::IconDocument).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gridglyph_icons::{CollectionRegistry, DiskStore, IconLibrary};
//! use gridglyph_net::HttpClient;
//!
//! let library = IconLibrary::new(
//!     CollectionRegistry::default(),
//!     Arc::new(DiskStore::new("/tmp/gridglyph-icons")?),
//!     Arc::new(HttpClient::new()?),
//! );
//!
//! let star = library.get_icon("material", "star", false)?;
//! println!("{} paths", star.paths().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod registry;
pub mod store;

mod error;
mod library;

pub use error::{IconError, Result};
pub use library::IconLibrary;
pub use registry::{CollectionRegistry, DEFAULT_COLLECTIONS};
pub use store::{ByteStore, DiskStore, MemoryStore};

/// Target names for log filtering.
pub mod targets {
    /// Fetch-or-reuse decisions.
    pub const LIBRARY: &str = "gridglyph_icons::library";
    /// Byte store target.
    pub const CACHE: &str = "gridglyph_icons::cache";
}
