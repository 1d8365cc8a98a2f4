//! Error types for the rendering module.

/// Errors that can occur while rendering glyphs.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The generated SVG could not be parsed by the rasterizer.
    #[error("SVG error: {0}")]
    Svg(String),

    /// A pixel buffer could not be allocated for the requested size.
    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    /// Encoding the rasterized image failed.
    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors raised while reading an icon document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    /// The bytes are not well-formed XML, or have no root element.
    #[error("malformed icon document: {0}")]
    Malformed(String),

    /// The root element has no `viewBox` attribute.
    #[error("icon document has no viewBox")]
    MissingViewbox,

    /// The `viewBox` attribute is not four numbers with a positive size.
    #[error("invalid viewBox '{0}'")]
    InvalidViewbox(String),
}

/// Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
