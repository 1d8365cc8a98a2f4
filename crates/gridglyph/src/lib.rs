//! Text-grid aligned tags, progress bars and icons.
//!
//! gridglyph draws small SVG images meant to be inlined into monospaced
//! text: every image is a whole number of character cells wide and slightly
//! shorter than one line, so it never disturbs the alignment of the text
//! around it.
//!
//! - **Tags** are rounded boxes around a short label.
//! - **Progress bars** are boxes filled up to a fraction of their width.
//! - **Icons** are fetched by name from remote collections (Bootstrap,
//!   Material Design, Octicons, Boxicons or your own), cached on disk, and
//!   redrawn in one color inside a two-cell badge.
//!
//! # Quick Start
//!
//! ```no_run
//! use gridglyph::prelude::*;
//!
//! let glyphs = Glyphs::new()?;
//!
//! let tag = glyphs.make_tag("DONE", None, &StyleOverrides::new().background("palegreen"))?;
//! let bar = glyphs.make_progress_bar(0.42, None, &StyleOverrides::new().width(10.0))?;
//! let star = glyphs.make_icon("material", "star", None, &StyleOverrides::new().foreground("gold"))?;
//!
//! std::fs::write("tag.svg", tag.to_svg_string())?;
//! std::fs::write("star.png", star.to_png(&Rasterizer::new())?)?;
//! # let _ = bar;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Styles
//!
//! Each call takes an optional base [`Style`] and a set of
//! [`StyleOverrides`]; the result is resolved field by field (see
//! [`StyleResolver`]). Named presets from the `[styles]` configuration
//! section are used through the `*_named` variants.
//!
//! # Configuration
//!
//! [`Glyphs::new`] reads `config.toml` from the platform configuration
//! directory; see the [`config`] module for the format.
//!
//! # Logging
//!
//! Everything is logged through `tracing`; no subscriber is installed.
//! Target names are listed in each crate's `targets` module.

pub mod config;

mod error;
mod glyphs;

pub use config::GlyphConfig;
pub use error::{ConfigError, Error, Result};
pub use glyphs::{Glyphs, GlyphsBuilder};

pub use gridglyph_icons::{
    ByteStore, CollectionRegistry, DiskStore, IconError, IconLibrary, MemoryStore,
};
pub use gridglyph_net::{Fetcher, HttpClient, NetworkError};
pub use gridglyph_render::{
    Ascent, CellMetrics, ComposeOptions, FixedMetrics, FontInfo, FontMetrics, IconDocument,
    IconPath, Image, RasterImage, Rasterizer, RenderError, SvgDocument, SystemFontMetrics,
};
pub use gridglyph_style::{
    ColorResolver, CssColors, FontWeight, PaletteColors, Style, StyleBook, StyleOverrides,
    StyleResolver,
};

/// Target names for log filtering.
pub mod targets {
    /// Facade construction target.
    pub const GLYPHS: &str = "gridglyph::glyphs";
    /// Configuration loading target.
    pub const CONFIG: &str = "gridglyph::config";
}

/// Make a tag with the process-wide [`Glyphs`].
pub fn make_tag(label: &str, style: Option<&Style>, overrides: &StyleOverrides) -> Result<Image> {
    Glyphs::global()?.make_tag(label, style, overrides)
}

/// Make a progress bar with the process-wide [`Glyphs`].
pub fn make_progress_bar(
    value: f32,
    style: Option<&Style>,
    overrides: &StyleOverrides,
) -> Result<Image> {
    Glyphs::global()?.make_progress_bar(value, style, overrides)
}

/// Make an icon badge with the process-wide [`Glyphs`].
pub fn make_icon(
    collection: &str,
    name: &str,
    style: Option<&Style>,
    overrides: &StyleOverrides,
) -> Result<Image> {
    Glyphs::global()?.make_icon(collection, name, style, overrides)
}

/// Get an icon's parsed document with the process-wide [`Glyphs`].
pub fn get_icon_data(collection: &str, name: &str, force_reload: bool) -> Result<IconDocument> {
    Glyphs::global()?.get_icon_data(collection, name, force_reload)
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::GlyphConfig;
    pub use crate::error::{Error, Result};
    pub use crate::glyphs::{Glyphs, GlyphsBuilder};
    pub use gridglyph_icons::{DiskStore, MemoryStore};
    pub use gridglyph_render::{Ascent, FixedMetrics, Image, Rasterizer};
    pub use gridglyph_style::{FontWeight, Style, StyleOverrides};
}
