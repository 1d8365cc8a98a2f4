//! The style resolver.

use std::fmt;
use std::sync::Arc;

use crate::color::{ColorResolver, CssColors, normalize_color};
use crate::style::{Style, StyleBook, StyleOverrides};
use crate::targets;

/// Turns partial style descriptions into complete, renderer-ready styles.
///
/// A resolver owns the default style, the color table used for name
/// normalization, and the book of named presets. It holds no mutable state,
/// so one resolver can serve every call in a process.
///
/// # Example
///
/// ```
/// use gridglyph_style::prelude::*;
///
/// let resolver = StyleResolver::new()
///     .with_style_book(StyleBook::new().with("alert", StyleOverrides::new().background("red")));
///
/// let style = resolver.resolve_named("alert", &StyleOverrides::new().weight(550));
/// assert_eq!(style.background, "#ff0000");
/// assert_eq!(style.weight, FontWeight::Numeric(550));
/// ```
#[derive(Clone)]
pub struct StyleResolver {
    default_style: Style,
    colors: Arc<dyn ColorResolver>,
    book: StyleBook,
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleResolver {
    /// Create a resolver with the built-in default style and CSS colors.
    pub fn new() -> Self {
        Self {
            default_style: Style::default(),
            colors: Arc::new(CssColors),
            book: StyleBook::new(),
        }
    }

    /// Replace the default style.
    #[must_use]
    pub fn with_default_style(mut self, style: Style) -> Self {
        self.default_style = style;
        self
    }

    /// Replace the color table used to normalize color names.
    #[must_use]
    pub fn with_colors(mut self, colors: impl ColorResolver + 'static) -> Self {
        self.colors = Arc::new(colors);
        self
    }

    /// Replace the color table with one shared with other resolvers.
    #[must_use]
    pub fn with_shared_colors(mut self, colors: Arc<dyn ColorResolver>) -> Self {
        self.colors = colors;
        self
    }

    /// Replace the book of named presets.
    #[must_use]
    pub fn with_style_book(mut self, book: StyleBook) -> Self {
        self.book = book;
        self
    }

    /// The default style, as configured (not normalized).
    pub fn default_style(&self) -> &Style {
        &self.default_style
    }

    /// The named presets.
    pub fn style_book(&self) -> &StyleBook {
        &self.book
    }

    /// Resolve a complete style.
    ///
    /// Every field is taken from `overrides` when set, else from `base`
    /// (the default style when `base` is `None`). The three color fields are
    /// then normalized and the weight is translated to a number. This never
    /// fails: unknown colors and weights pass through unchanged.
    pub fn resolve(&self, base: Option<&Style>, overrides: &StyleOverrides) -> Style {
        let base = base.unwrap_or(&self.default_style);
        let mut style = overrides.apply_to(base);

        style.foreground = normalize_color(self.colors.as_ref(), &style.foreground);
        style.background = normalize_color(self.colors.as_ref(), &style.background);
        style.stroke = normalize_color(self.colors.as_ref(), &style.stroke);
        style.weight = style.weight.normalized();

        tracing::trace!(target: targets::RESOLVE, ?style, "resolved style");
        style
    }

    /// Resolve a style from a named preset plus overrides.
    ///
    /// The preset is applied over the default style, then `overrides` over
    /// that. An unknown preset name is logged and treated as no preset.
    pub fn resolve_named(&self, name: &str, overrides: &StyleOverrides) -> Style {
        let mut combined = match self.book.get(name) {
            Some(preset) => preset.clone(),
            None => {
                tracing::warn!(target: targets::RESOLVE, name, "unknown named style, using default");
                StyleOverrides::new()
            }
        };
        combined.merge(overrides);
        self.resolve(None, &combined)
    }
}

impl fmt::Debug for StyleResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleResolver")
            .field("default_style", &self.default_style)
            .field("style_book", &self.book)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PaletteColors;
    use crate::weight::FontWeight;

    #[test]
    fn default_resolution_normalizes_colors() {
        let style = StyleResolver::new().resolve(None, &StyleOverrides::new());
        assert_eq!(style.foreground, "#000000");
        assert_eq!(style.background, "#ffffff");
        assert_eq!(style.stroke, "#000000");
        assert_eq!(style.weight, FontWeight::Numeric(400));
    }

    #[test]
    fn explicit_base_is_used() {
        let resolver = StyleResolver::new();
        let base = Style {
            radius: 9.0,
            ..Style::default()
        };
        let style = resolver.resolve(Some(&base), &StyleOverrides::new().padding(2.0));
        assert_eq!(style.radius, 9.0);
        assert_eq!(style.padding, 2.0);
    }

    #[test]
    fn custom_palette_replaces_css() {
        let resolver = StyleResolver::new()
            .with_colors(PaletteColors::new().with("black", "#111111"));
        let style = resolver.resolve(None, &StyleOverrides::new().background("white"));
        assert_eq!(style.foreground, "#111111");
        assert_eq!(style.background, "white");
    }

    #[test]
    fn unknown_named_style_falls_back() {
        let resolver = StyleResolver::new();
        let named = resolver.resolve_named("missing", &StyleOverrides::new().scale(1.0));
        let plain = resolver.resolve(None, &StyleOverrides::new().scale(1.0));
        assert_eq!(named, plain);
    }

    #[test]
    fn overrides_win_over_preset() {
        let resolver = StyleResolver::new().with_style_book(
            StyleBook::new().with("alert", StyleOverrides::new().background("red").radius(0.0)),
        );
        let style = resolver.resolve_named("alert", &StyleOverrides::new().background("blue"));
        assert_eq!(style.background, "#0000ff");
        assert_eq!(style.radius, 0.0);
    }
}
