//! Box and placement arithmetic.
//!
//! Every glyph is a box one text line tall, centered horizontally in an
//! image that adds `margin` character cells of breathing room:
//!
//! ```text
//! |<-------------------- svg width -------------------->|
//! |  margin/2  |<------- content width ------->| margin/2 |
//!              +-------------------------------+
//!              |  border, inset fill, content  |  0.9 * cell height
//!              +-------------------------------+
//! ```

use gridglyph_style::Style;

use crate::metrics::{CellMetrics, FontInfo, FontMetrics};
use crate::targets;
use crate::transform::Transform2D;
use crate::types::{Point, Rect};

/// Thinnest border that is still drawn.
pub const BORDER_THRESHOLD: f32 = 0.25;

/// Image height as a portion of the cell height.
pub const HEIGHT_RATIO: f32 = 0.9;

/// Width of an icon box, in character cells.
pub const ICON_CELLS: f32 = 2.0;

/// The outer image and the box inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    /// Width of the whole image.
    pub width: f32,
    /// Height of the whole image.
    pub height: f32,
    /// The content box.
    pub content: Rect,
    /// Border thickness.
    pub thickness: f32,
    /// Outer corner radius.
    pub radius: f32,
}

impl BoxGeometry {
    /// Lay out a box `content_width` wide on the text grid.
    pub fn new(style: &Style, cell: CellMetrics, content_width: f32) -> Self {
        let height = cell.char_height * HEIGHT_RATIO;
        let width = content_width + style.margin * cell.char_width;
        let x = (width - content_width) / 2.0;

        Self {
            width,
            height,
            content: Rect::new(x, 0.0, content_width, height),
            thickness: style.thickness,
            radius: style.radius,
        }
    }

    /// Whether the border rectangle is drawn.
    pub fn has_border(&self) -> bool {
        self.thickness >= BORDER_THRESHOLD
    }

    /// The border rectangle, when drawn.
    pub fn border_rect(&self) -> Option<Rect> {
        self.has_border().then_some(self.content)
    }

    /// The background rectangle, inset by half the border thickness.
    ///
    /// The inset applies even when the border itself is too thin to draw.
    pub fn fill_rect(&self) -> Rect {
        self.content.inset(self.thickness / 2.0)
    }

    /// Corner radius of the background rectangle, never negative.
    pub fn fill_radius(&self) -> f32 {
        (self.radius - self.thickness / 2.0).max(0.0)
    }
}

/// Layout of a text tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagGeometry {
    pub frame: BoxGeometry,
    /// Label baseline origin.
    pub text: Point,
    /// Measurements of the label font.
    pub font: FontInfo,
}

impl TagGeometry {
    /// Lay out `label` in a tag.
    ///
    /// The label length counts Unicode scalar values, matching one glyph per
    /// character on a monospace grid.
    pub fn compute(style: &Style, metrics: &dyn FontMetrics, label: &str) -> Self {
        let cell = metrics.cell_metrics();
        let font = metrics.font_info(&style.family, style.height);
        let len = label.chars().count() as f32;

        let content_width = (len + style.padding) * cell.char_width;
        let frame = BoxGeometry::new(style, cell, content_width);
        let text = Point::new(
            frame.content.x() + (content_width - len * font.char_width) / 2.0,
            font.ascent,
        );

        tracing::debug!(
            target: targets::GEOMETRY,
            width = frame.width,
            height = frame.height,
            text_x = text.x,
            "tag geometry"
        );

        Self { frame, text, font }
    }
}

/// Layout of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressGeometry {
    pub frame: BoxGeometry,
    /// The filled portion.
    pub bar: Rect,
}

impl ProgressGeometry {
    /// Lay out a bar filled to `value`.
    ///
    /// `value` is a fraction of the full width and is not clamped; values
    /// outside `[0, 1]` produce a bar shorter than empty or longer than the
    /// box.
    pub fn compute(style: &Style, metrics: &dyn FontMetrics, value: f32) -> Self {
        let cell = metrics.cell_metrics();
        let content_width = style.width * cell.char_width;
        let frame = BoxGeometry::new(style, cell, content_width);

        let t = style.thickness;
        let p = style.padding;
        let bar = Rect::new(
            frame.content.x() + t / 2.0 + p,
            t / 2.0 + p,
            value * content_width - t - 2.0 * p,
            frame.content.height() - t - 2.0 * p,
        );

        tracing::debug!(
            target: targets::GEOMETRY,
            value,
            bar_width = bar.width(),
            "progress geometry"
        );

        Self { frame, bar }
    }
}

/// Layout of an icon badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGeometry {
    pub frame: BoxGeometry,
    /// Uniform scale from icon units to pixels.
    pub scale: f32,
    /// Maps icon coordinates into the content box.
    pub transform: Transform2D,
}

impl IconGeometry {
    /// Fit an icon with the given `viewbox` into a badge.
    ///
    /// The icon is scaled so its viewbox height is `style.scale` times the
    /// content height, and its viewbox center lands on the content center.
    pub fn compute(style: &Style, metrics: &dyn FontMetrics, viewbox: &Rect) -> Self {
        let cell = metrics.cell_metrics();
        let frame = BoxGeometry::new(style, cell, ICON_CELLS * cell.char_width);

        let scale = style.scale * frame.content.height() / viewbox.height();
        let transform = Transform2D::fit_centered(viewbox, &frame.content, scale);

        tracing::debug!(target: targets::GEOMETRY, scale, %transform, "icon geometry");

        Self {
            frame,
            scale,
            transform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FixedMetrics;

    fn metrics() -> FixedMetrics {
        FixedMetrics::new(10.0, 20.0).with_font(FontInfo {
            size: 12.0,
            ascent: 14.0,
            char_width: 8.0,
        })
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn frame_is_centered_with_margin() {
        let style = Style {
            margin: 2.0,
            ..Style::default()
        };
        let frame = BoxGeometry::new(&style, CellMetrics::new(10.0, 20.0), 50.0);
        assert_eq!(frame.width, 70.0);
        assert_eq!(frame.height, 18.0);
        assert_eq!(frame.content, Rect::new(10.0, 0.0, 50.0, 18.0));
    }

    #[test]
    fn border_threshold() {
        let thin = Style {
            thickness: 0.24,
            ..Style::default()
        };
        let frame = BoxGeometry::new(&thin, CellMetrics::default(), 10.0);
        assert!(frame.border_rect().is_none());
        assert!(approx_eq(frame.fill_rect().x(), frame.content.x() + 0.12));

        let visible = Style {
            thickness: 0.25,
            ..Style::default()
        };
        let frame = BoxGeometry::new(&visible, CellMetrics::default(), 10.0);
        assert_eq!(frame.border_rect(), Some(frame.content));
    }

    #[test]
    fn fill_radius_never_negative() {
        let style = Style {
            thickness: 4.0,
            radius: 1.0,
            ..Style::default()
        };
        let frame = BoxGeometry::new(&style, CellMetrics::default(), 10.0);
        assert_eq!(frame.fill_radius(), 0.0);
    }

    #[test]
    fn tag_text_is_centered() {
        let style = Style {
            padding: 2.0,
            margin: 1.0,
            ..Style::default()
        };
        let tag = TagGeometry::compute(&style, &metrics(), "TODO");

        // (4 + 2) cells of 10px, plus one cell of margin.
        assert_eq!(tag.frame.content.width(), 60.0);
        assert_eq!(tag.frame.width, 70.0);
        assert_eq!(tag.frame.content.x(), 5.0);
        // 5 + (60 - 4 * 8) / 2
        assert_eq!(tag.text, Point::new(19.0, 14.0));
    }

    #[test]
    fn tag_length_counts_characters() {
        let style = Style::default();
        let ascii = TagGeometry::compute(&style, &metrics(), "abc");
        let accented = TagGeometry::compute(&style, &metrics(), "àbç");
        assert_eq!(ascii.frame, accented.frame);
    }

    #[test]
    fn progress_widths() {
        let style = Style {
            width: 10.0,
            thickness: 1.0,
            padding: 1.0,
            margin: 0.0,
            ..Style::default()
        };
        let metrics = metrics();

        let empty = ProgressGeometry::compute(&style, &metrics, 0.0);
        assert_eq!(empty.bar.width(), -3.0);

        let half = ProgressGeometry::compute(&style, &metrics, 0.5);
        assert_eq!(half.bar.width(), 47.0);
        assert_eq!(half.bar.x(), 1.5);
        assert_eq!(half.bar.y(), 1.5);
        assert_eq!(half.bar.height(), 15.0);

        let full = ProgressGeometry::compute(&style, &metrics, 1.0);
        assert_eq!(full.bar.width(), 97.0);
    }

    #[test]
    fn icon_center_maps_to_content_center() {
        let style = Style {
            scale: 0.75,
            margin: 1.0,
            ..Style::default()
        };
        let viewbox = Rect::new(0.0, 0.0, 24.0, 24.0);
        let icon = IconGeometry::compute(&style, &metrics(), &viewbox);

        assert!(approx_eq(icon.scale, 0.75 * 18.0 / 24.0));

        let center = icon.transform.transform_point(viewbox.center());
        let expected = icon.frame.content.center();
        assert!(approx_eq(center.x, expected.x));
        assert!(approx_eq(center.y, expected.y));
    }
}
