//! Error types for the icon pipeline.

use gridglyph_net::NetworkError;
use gridglyph_render::DocumentError;

/// Errors that can occur while getting an icon.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The collection is not registered.
    #[error("unknown icon collection '{0}'")]
    UnknownCollection(String),

    /// Fetching the icon failed.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: NetworkError,
    },

    /// The icon bytes are not a usable SVG document.
    #[error("failed to parse {url}: {message}")]
    Parse { url: String, message: String },

    /// The icon has no `viewBox`, so it cannot be scaled.
    #[error("icon {url} has no viewBox")]
    MissingViewbox { url: String },

    /// Reading or writing the byte store failed.
    #[error("icon cache error: {0}")]
    Cache(#[from] std::io::Error),
}

impl IconError {
    pub(crate) fn from_document(url: &str, error: DocumentError) -> Self {
        match error {
            DocumentError::MissingViewbox => Self::MissingViewbox {
                url: url.to_string(),
            },
            other => Self::Parse {
                url: url.to_string(),
                message: other.to_string(),
            },
        }
    }
}

/// Result type for icon operations.
pub type Result<T> = std::result::Result<T, IconError>;
