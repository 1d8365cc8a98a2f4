//! Geometry, SVG composition and rasterization for gridglyph.
//!
//! Glyphs are small vector images sized to sit on a fixed-width text grid:
//! a tag or a progress bar occupies a whole number of character cells, an
//! icon exactly two. This crate turns a resolved [`Style`](gridglyph_style::Style)
//! plus grid measurements into such an image.
//!
//! The pipeline for every glyph is the same:
//!
//! 1. [`FontMetrics`] reports the cell size and label font measurements.
//! 2. [`geometry`] computes the box, label position, bar extent or icon
//!    transform.
//! 3. [`compose`] assembles an [`SvgDocument`] from those numbers.
//! 4. [`Image`] wraps the document; [`Rasterizer`] turns it into pixels on
//!    demand.
//!
//! # Example
//!
//! ```
//! use gridglyph_render::prelude::*;
//! use gridglyph_style::Style;
//!
//! let metrics = FixedMetrics::new(8.0, 16.0);
//! let document = compose_tag(&Style::default(), &metrics, "TODO");
//!
//! let svg = Image::new(document).to_svg_string();
//! assert!(svg.contains(">TODO</text>"));
//! ```

pub mod compose;
pub mod document;
pub mod geometry;
pub mod image;
pub mod metrics;
pub mod svg;

mod error;
mod transform;
mod types;

pub use compose::{ComposeOptions, compose_icon, compose_progress, compose_tag};
pub use document::{IconDocument, IconPath};
pub use error::{DocumentError, RenderError, RenderResult};
pub use geometry::{BoxGeometry, IconGeometry, ProgressGeometry, TagGeometry};
pub use image::{Ascent, Image, RasterImage, Rasterizer};
pub use metrics::{CellMetrics, FixedMetrics, FontInfo, FontMetrics, SystemFontMetrics};
pub use svg::{SvgDocument, SvgNode};
pub use transform::Transform2D;
pub use types::{Point, Rect, Size};

/// Target names for log filtering.
pub mod targets {
    /// Font measurement target.
    pub const METRICS: &str = "gridglyph_render::metrics";
    /// Layout arithmetic target.
    pub const GEOMETRY: &str = "gridglyph_render::geometry";
    /// Document assembly target.
    pub const COMPOSE: &str = "gridglyph_render::compose";
    /// Icon document parsing target.
    pub const DOCUMENT: &str = "gridglyph_render::document";
    /// Rasterization target.
    pub const RASTER: &str = "gridglyph_render::raster";
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::compose::{ComposeOptions, compose_icon, compose_progress, compose_tag};
    pub use crate::document::{IconDocument, IconPath};
    pub use crate::error::{RenderError, RenderResult};
    pub use crate::image::{Ascent, Image, Rasterizer};
    pub use crate::metrics::{CellMetrics, FixedMetrics, FontInfo, FontMetrics};
    pub use crate::svg::{SvgDocument, SvgNode};
    pub use crate::transform::Transform2D;
    pub use crate::types::{Point, Rect, Size};
}
