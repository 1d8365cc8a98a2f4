//! Assembling glyphs into SVG documents.
//!
//! Every glyph is drawn bottom to top as:
//!
//! 1. the border rectangle in the stroke color, when the border is thick enough
//! 2. the background rectangle, inset by half the border
//! 3. the content (label, bar or icon paths) in the foreground color

use gridglyph_style::Style;

use crate::document::IconDocument;
use crate::geometry::{BoxGeometry, IconGeometry, ProgressGeometry, TagGeometry};
use crate::metrics::FontMetrics;
use crate::svg::{SvgDocument, SvgNode};
use crate::targets;

/// Options that change how content is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Keep each icon path's own fill instead of the foreground color.
    ///
    /// Paths without a fill still use the foreground.
    pub preserve_original_fills: bool,
}

impl ComposeOptions {
    /// Create the default options: monochrome icons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether icon paths keep their own fills.
    #[must_use]
    pub fn with_preserve_original_fills(mut self, preserve: bool) -> Self {
        self.preserve_original_fills = preserve;
        self
    }
}

/// Start a document with the border and background of `frame`.
fn framed_document(style: &Style, frame: &BoxGeometry) -> SvgDocument {
    let mut document = SvgDocument::new(frame.width, frame.height);

    if let Some(border) = frame.border_rect() {
        document.push(SvgNode::Rect {
            rect: border,
            radius: frame.radius,
            fill: style.stroke.clone(),
        });
    }

    document.push(SvgNode::Rect {
        rect: frame.fill_rect(),
        radius: frame.fill_radius(),
        fill: style.background.clone(),
    });

    document
}

/// Draw `label` in a rounded box.
pub fn compose_tag(style: &Style, metrics: &dyn FontMetrics, label: &str) -> SvgDocument {
    let geometry = TagGeometry::compute(style, metrics, label);
    let mut document = framed_document(style, &geometry.frame);

    document.push(SvgNode::Text {
        position: geometry.text,
        content: label.to_string(),
        family: style.family.clone(),
        size: geometry.font.size,
        weight: style.weight.to_string(),
        fill: style.foreground.clone(),
    });

    tracing::debug!(target: targets::COMPOSE, label, nodes = document.nodes().len(), "composed tag");
    document
}

/// Draw a progress bar filled to `value`.
///
/// See [`ProgressGeometry::compute`] for how `value` maps to a width.
pub fn compose_progress(style: &Style, metrics: &dyn FontMetrics, value: f32) -> SvgDocument {
    let geometry = ProgressGeometry::compute(style, metrics, value);
    let mut document = framed_document(style, &geometry.frame);

    document.push(SvgNode::Rect {
        rect: geometry.bar,
        radius: 0.0,
        fill: style.foreground.clone(),
    });

    tracing::debug!(target: targets::COMPOSE, value, "composed progress bar");
    document
}

/// Draw `icon` centered in a two-cell box.
pub fn compose_icon(
    style: &Style,
    metrics: &dyn FontMetrics,
    icon: &IconDocument,
    options: ComposeOptions,
) -> SvgDocument {
    let geometry = IconGeometry::compute(style, metrics, icon.viewbox());
    let mut document = framed_document(style, &geometry.frame);

    for path in icon.paths() {
        let fill = match (&path.fill, options.preserve_original_fills) {
            (Some(fill), true) => fill.clone(),
            _ => style.foreground.clone(),
        };
        document.push(SvgNode::Path {
            data: path.data.clone(),
            fill,
            transform: geometry.transform,
        });
    }

    tracing::debug!(target: targets::COMPOSE, paths = icon.paths().len(), "composed icon");
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::IconPath;
    use crate::metrics::FixedMetrics;
    use crate::types::Rect;

    fn style() -> Style {
        Style {
            foreground: "#111111".into(),
            background: "#222222".into(),
            stroke: "#333333".into(),
            ..Style::default()
        }
    }

    fn fills(document: &SvgDocument) -> Vec<&str> {
        document.nodes().iter().map(SvgNode::fill).collect()
    }

    #[test]
    fn tag_layers() {
        let document = compose_tag(&style(), &FixedMetrics::new(8.0, 16.0), "NEW");
        assert_eq!(fills(&document), ["#333333", "#222222", "#111111"]);
        assert!(matches!(&document.nodes()[2], SvgNode::Text { content, .. } if content == "NEW"));
    }

    #[test]
    fn thin_border_is_omitted() {
        let style = Style {
            thickness: 0.24,
            ..style()
        };
        let document = compose_progress(&style, &FixedMetrics::new(8.0, 16.0), 0.5);
        assert_eq!(fills(&document), ["#222222", "#111111"]);

        let style = Style {
            thickness: 0.25,
            ..style
        };
        let document = compose_progress(&style, &FixedMetrics::new(8.0, 16.0), 0.5);
        assert_eq!(fills(&document), ["#333333", "#222222", "#111111"]);
    }

    #[test]
    fn icon_paths_share_transform() {
        let icon = IconDocument::new(
            Rect::new(0.0, 0.0, 24.0, 24.0),
            vec![
                IconPath::new("M0 0h24v24H0z"),
                IconPath {
                    data: "M12 2L2 22h20z".into(),
                    fill: Some("#ff0000".into()),
                },
            ],
        );
        let metrics = FixedMetrics::new(8.0, 16.0);

        let document = compose_icon(&style(), &metrics, &icon, ComposeOptions::new());
        assert_eq!(fills(&document), ["#333333", "#222222", "#111111", "#111111"]);

        let transforms: Vec<_> = document
            .nodes()
            .iter()
            .filter_map(|node| match node {
                SvgNode::Path { transform, .. } => Some(*transform),
                _ => None,
            })
            .collect();
        assert_eq!(transforms.len(), 2);
        assert_eq!(transforms[0], transforms[1]);

        let options = ComposeOptions::new().with_preserve_original_fills(true);
        let document = compose_icon(&style(), &metrics, &icon, options);
        assert_eq!(fills(&document), ["#333333", "#222222", "#111111", "#ff0000"]);
    }
}
