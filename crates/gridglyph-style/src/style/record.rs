//! The fully populated style record.

use crate::weight::FontWeight;

/// Names of every style field, in declaration order.
///
/// These are also the keys accepted in TOML style tables.
pub const STYLE_KEYS: &[&str] = &[
    "foreground",
    "background",
    "stroke",
    "thickness",
    "radius",
    "padding",
    "margin",
    "width",
    "scale",
    "family",
    "height",
    "weight",
];

/// A complete set of visual parameters for one glyph.
///
/// Lengths are in device pixels unless noted. `padding` is measured in
/// character cells for tags and in pixels for the progress bar inset;
/// `margin` and `width` are measured in character cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Text, progress fill, and icon color.
    pub foreground: String,
    /// Fill color of the inner box.
    pub background: String,
    /// Border color.
    pub stroke: String,
    /// Border thickness. Below 0.25 no border is drawn.
    pub thickness: f32,
    /// Corner radius of the outer box.
    pub radius: f32,
    /// Inner padding.
    pub padding: f32,
    /// Horizontal margin around the box, in character cells.
    pub margin: f32,
    /// Progress bar width, in character cells.
    pub width: f32,
    /// Icon scale relative to the box height.
    pub scale: f32,
    /// Font family for tag labels.
    pub family: String,
    /// Font size for tag labels.
    pub height: f32,
    /// Font weight for tag labels.
    pub weight: FontWeight,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            foreground: "black".to_string(),
            background: "white".to_string(),
            stroke: "black".to_string(),
            thickness: 1.0,
            radius: 3.0,
            padding: 1.0,
            margin: 1.0,
            width: 20.0,
            scale: 0.75,
            family: "Roboto Mono".to_string(),
            height: 12.0,
            weight: FontWeight::REGULAR,
        }
    }
}

impl Style {
    /// Create the built-in default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the border rectangle should be drawn at this thickness.
    pub fn has_border(&self) -> bool {
        self.thickness >= 0.25
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_threshold() {
        let mut style = Style::new();
        style.thickness = 0.24;
        assert!(!style.has_border());
        style.thickness = 0.25;
        assert!(style.has_border());
    }

    #[test]
    fn keys_are_unique() {
        let mut keys = STYLE_KEYS.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), STYLE_KEYS.len());
    }
}
