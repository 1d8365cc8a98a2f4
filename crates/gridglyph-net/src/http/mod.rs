//! Blocking HTTP client.
//!
//! # Example
//!
//! ```ignore
//! use gridglyph_net::http::HttpClient;
//!
//! let client = HttpClient::new()?;
//! let svg = client.get_bytes("https://raw.githubusercontent.com/primer/octicons/master/icons/star-24.svg")?;
//! ```

mod client;

pub use client::{HttpClient, HttpClientBuilder, HttpClientConfig};
