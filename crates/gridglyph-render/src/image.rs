//! Finished glyph images and rasterization.
//!
//! An [`Image`] holds the vector document of a glyph plus the hints a host
//! needs to place it inline with text. Nothing is rasterized until asked:
//!
//! ```
//! use gridglyph_render::prelude::*;
//!
//! let style = gridglyph_style::Style::default();
//! let metrics = FixedMetrics::new(8.0, 16.0);
//! let image = Image::new(compose_progress(&style, &metrics, 0.3));
//!
//! let rasterizer = Rasterizer::without_fonts();
//! let pixels = image.rasterize(&rasterizer).unwrap();
//! assert_eq!(pixels.width(), image.document().width().ceil() as u32);
//! ```

use std::io::Cursor;
use std::sync::Arc;

use resvg::tiny_skia;
use resvg::usvg;

use crate::error::{RenderError, RenderResult};
use crate::svg::SvgDocument;
use crate::targets;

/// Vertical placement of an image relative to the text baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ascent {
    /// Center the image on the text line.
    #[default]
    Center,
    /// Put the given percentage of the image above the baseline.
    Percent(u8),
}

/// A composed glyph, ready to be inlined in text.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    document: SvgDocument,
    ascent: Ascent,
    scale: f32,
}

impl Image {
    /// Wrap a document, centered on the text line at scale 1.
    pub fn new(document: SvgDocument) -> Self {
        Self {
            document,
            ascent: Ascent::Center,
            scale: 1.0,
        }
    }

    /// Set the vertical placement.
    #[must_use]
    pub fn with_ascent(mut self, ascent: Ascent) -> Self {
        self.ascent = ascent;
        self
    }

    /// Set the display scale used when rasterizing.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn document(&self) -> &SvgDocument {
        &self.document
    }

    pub fn ascent(&self) -> Ascent {
        self.ascent
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The image as SVG text.
    pub fn to_svg_string(&self) -> String {
        self.document.to_svg_string()
    }

    /// Render the image at its display scale.
    pub fn rasterize(&self, rasterizer: &Rasterizer) -> RenderResult<RasterImage> {
        rasterizer.render(&self.document, self.scale)
    }

    /// Render the image and encode it as PNG.
    pub fn to_png(&self, rasterizer: &Rasterizer) -> RenderResult<Vec<u8>> {
        self.rasterize(rasterizer)?.to_png()
    }
}

/// Renders [`SvgDocument`]s to pixels with `resvg`.
///
/// Tag labels need fonts; the rasterizer shares one font database across
/// every render. Creating it with [`Rasterizer::new`] loads the system fonts,
/// which takes a noticeable moment, so keep one around.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    /// Create a rasterizer with the system fonts loaded.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(target: targets::RASTER, faces = db.len(), "loaded rasterizer fonts");
        Self { fontdb: Arc::new(db) }
    }

    /// Create a rasterizer without any fonts. Text is not drawn.
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Render `document` scaled by `scale`.
    ///
    /// The pixel size is the document size times `scale`, rounded up and at
    /// least one pixel in each direction.
    pub fn render(&self, document: &SvgDocument, scale: f32) -> RenderResult<RasterImage> {
        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);

        let source = document.to_svg_string();
        let tree = usvg::Tree::from_str(&source, &options)
            .map_err(|e| RenderError::Svg(e.to_string()))?;

        let width = pixel_size(document.width(), scale);
        let height = pixel_size(document.height(), scale);
        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(RenderError::Pixmap { width, height })?;

        let transform = tiny_skia::Transform::from_scale(scale, scale);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        tracing::debug!(target: targets::RASTER, width, height, "rasterized");

        // Convert from premultiplied RGBA to straight RGBA
        let data = pixmap.data();
        let mut pixels = Vec::with_capacity(data.len());
        for chunk in data.chunks(4) {
            let a = chunk[3] as f32 / 255.0;
            if a > 0.0 {
                pixels.push((chunk[0] as f32 / a).min(255.0) as u8);
                pixels.push((chunk[1] as f32 / a).min(255.0) as u8);
                pixels.push((chunk[2] as f32 / a).min(255.0) as u8);
                pixels.push(chunk[3]);
            } else {
                pixels.extend_from_slice(&[0, 0, 0, 0]);
            }
        }

        Ok(RasterImage {
            width,
            height,
            pixels,
        })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

fn pixel_size(length: f32, scale: f32) -> u32 {
    ((length * scale).ceil() as u32).max(1)
}

/// Straight (non-premultiplied) RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA bytes, four per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA value at `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let p = self.pixels.get(offset..offset + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Convert to an [`image::RgbaImage`](::image::RgbaImage).
    pub fn to_rgba_image(&self) -> RenderResult<::image::RgbaImage> {
        ::image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            RenderError::Pixmap {
                width: self.width,
                height: self.height,
            },
        )
    }

    /// Encode as PNG.
    pub fn to_png(&self) -> RenderResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.to_rgba_image()?
            .write_to(&mut Cursor::new(&mut bytes), ::image::ImageFormat::Png)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::SvgNode;
    use crate::types::Rect;

    fn square(fill: &str) -> SvgDocument {
        let mut document = SvgDocument::new(4.0, 4.0);
        document.push(SvgNode::Rect {
            rect: Rect::new(0.0, 0.0, 4.0, 4.0),
            radius: 0.0,
            fill: fill.to_string(),
        });
        document
    }

    #[test]
    fn defaults() {
        let image = Image::new(SvgDocument::new(1.0, 1.0));
        assert_eq!(image.ascent(), Ascent::Center);
        assert_eq!(image.scale(), 1.0);
    }

    #[test]
    fn rasterize_solid_square() {
        let image = Image::new(square("#ff0000"));
        let raster = image.rasterize(&Rasterizer::without_fonts()).unwrap();
        assert_eq!((raster.width(), raster.height()), (4, 4));
        assert_eq!(raster.pixel(1, 1), Some([255, 0, 0, 255]));
        assert_eq!(raster.pixel(4, 0), None);
    }

    #[test]
    fn rasterize_scaled() {
        let image = Image::new(square("#0000ff")).with_scale(2.5);
        let raster = image.rasterize(&Rasterizer::without_fonts()).unwrap();
        assert_eq!((raster.width(), raster.height()), (10, 10));
    }

    #[test]
    fn png_signature() {
        let image = Image::new(square("#00ff00"));
        let png = image.to_png(&Rasterizer::without_fonts()).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
