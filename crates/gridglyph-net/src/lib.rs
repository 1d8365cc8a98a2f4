//! Fetch layer for gridglyph.
//!
//! Icon bytes come from remote collections. This crate provides:
//!
//! - **[`Fetcher`]**: the one-method seam the icon library fetches through,
//!   so tests and offline setups can substitute canned bytes
//! - **[`HttpClient`]**: the blocking implementation used in production,
//!   built on `reqwest`, which also serves `file://` URLs from disk
//!
//! # Example
//!
//! ```ignore
//! use gridglyph_net::{Fetcher, HttpClient};
//!
//! let client = HttpClient::builder()
//!     .timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//!
//! let bytes = client.fetch("https://icons.getbootstrap.com/assets/icons/star.svg")?;
//! ```
//!
//! Fetching blocks the calling thread until the transfer completes or
//! fails. There is no retry; callers decide what a failure means.

mod error;
mod fetch;
pub mod http;

pub use error::{NetworkError, Result};
pub use fetch::Fetcher;
pub use http::{HttpClient, HttpClientBuilder, HttpClientConfig};

/// Target names for log filtering.
pub mod targets {
    /// HTTP transfer target.
    pub const HTTP: &str = "gridglyph_net::http";
}
