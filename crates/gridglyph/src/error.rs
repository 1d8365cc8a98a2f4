//! Error types for the glyph facade.

use std::path::PathBuf;

use gridglyph_icons::IconError;
use gridglyph_render::RenderError;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has values of the wrong type.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The `[styles]` section is malformed.
    #[error("invalid named styles: {0}")]
    Styles(#[from] gridglyph_style::Error),
}

/// Errors that can occur while making glyphs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Getting an icon failed.
    #[error(transparent)]
    Icon(#[from] IconError),

    /// Rasterization failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be created.
    #[error("cannot create HTTP client: {0}")]
    Network(#[from] gridglyph_net::NetworkError),
}

/// Result type for glyph operations.
pub type Result<T> = std::result::Result<T, Error>;
