//! Color name normalization.
//!
//! Styles may name colors (`"crimson"`, `"Light Gray"`) or spell them out as
//! `#rrggbb`. Before drawing, every color field is run through
//! [`normalize_color`], which asks a [`ColorResolver`] for the hex form and
//! keeps the original text when the resolver does not know the name.

use std::collections::HashMap;
use std::fmt;

/// Resolves color names to `#rrggbb` strings.
///
/// Implementations return `None` for names they do not recognize; the
/// caller then passes the name through unchanged.
pub trait ColorResolver: Send + Sync {
    /// Resolve a color name to its `#rrggbb` form.
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Normalize a color value for the renderer.
///
/// A value that is already `#rrggbb` is returned unchanged, whatever its
/// letter case. Otherwise the resolver is consulted; unknown names pass
/// through as written.
pub fn normalize_color(resolver: &dyn ColorResolver, value: &str) -> String {
    if is_hex_color(value) {
        return value.to_string();
    }
    resolver.resolve(value).unwrap_or_else(|| value.to_string())
}

/// Check whether a value is a six digit `#rrggbb` color.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Fold a color name into lookup form: lowercase, without spaces.
fn color_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Expand `#rgb` shorthand to `#rrggbb`.
fn expand_short_hex(value: &str) -> Option<String> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 3 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let mut expanded = String::with_capacity(7);
    expanded.push('#');
    for c in digits.chars() {
        let c = c.to_ascii_lowercase();
        expanded.push(c);
        expanded.push(c);
    }
    Some(expanded)
}

/// The CSS named color table.
///
/// This is the default resolver. It also expands `#rgb` shorthand.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColors;

impl ColorResolver for CssColors {
    fn resolve(&self, name: &str) -> Option<String> {
        if let Some(expanded) = expand_short_hex(name) {
            return Some(expanded);
        }
        let key = color_key(name);
        CSS_COLORS
            .binary_search_by(|(candidate, _)| (*candidate).cmp(key.as_str()))
            .ok()
            .map(|index| CSS_COLORS[index].1.to_string())
    }
}

/// A fixed palette of named colors.
///
/// Useful for application palettes (`"accent"`, `"muted"`) and for tests
/// that must not depend on a platform color table. Names missing from the
/// palette can optionally fall back to [`CssColors`].
#[derive(Clone, Default)]
pub struct PaletteColors {
    colors: HashMap<String, String>,
    css_fallback: bool,
}

impl PaletteColors {
    /// Create an empty palette without fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named color.
    #[must_use]
    pub fn with(mut self, name: &str, hex: impl Into<String>) -> Self {
        self.insert(name, hex);
        self
    }

    /// Fall back to CSS names for colors missing from the palette.
    #[must_use]
    pub fn with_css_fallback(mut self) -> Self {
        self.css_fallback = true;
        self
    }

    /// Add or replace a named color.
    pub fn insert(&mut self, name: &str, hex: impl Into<String>) {
        self.colors.insert(color_key(name), hex.into());
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl ColorResolver for PaletteColors {
    fn resolve(&self, name: &str) -> Option<String> {
        if let Some(hex) = self.colors.get(&color_key(name)) {
            return Some(hex.clone());
        }
        if self.css_fallback {
            CssColors.resolve(name)
        } else {
            None
        }
    }
}

impl fmt::Debug for PaletteColors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteColors")
            .field("colors", &self.colors.len())
            .field("css_fallback", &self.css_fallback)
            .finish()
    }
}

/// CSS named colors, sorted by name for binary search.
const CSS_COLORS: &[(&str, &str)] = &[
    ("aliceblue", "#f0f8ff"),
    ("antiquewhite", "#faebd7"),
    ("aqua", "#00ffff"),
    ("aquamarine", "#7fffd4"),
    ("azure", "#f0ffff"),
    ("beige", "#f5f5dc"),
    ("bisque", "#ffe4c4"),
    ("black", "#000000"),
    ("blanchedalmond", "#ffebcd"),
    ("blue", "#0000ff"),
    ("blueviolet", "#8a2be2"),
    ("brown", "#a52a2a"),
    ("burlywood", "#deb887"),
    ("cadetblue", "#5f9ea0"),
    ("chartreuse", "#7fff00"),
    ("chocolate", "#d2691e"),
    ("coral", "#ff7f50"),
    ("cornflowerblue", "#6495ed"),
    ("cornsilk", "#fff8dc"),
    ("crimson", "#dc143c"),
    ("cyan", "#00ffff"),
    ("darkblue", "#00008b"),
    ("darkcyan", "#008b8b"),
    ("darkgoldenrod", "#b8860b"),
    ("darkgray", "#a9a9a9"),
    ("darkgreen", "#006400"),
    ("darkgrey", "#a9a9a9"),
    ("darkkhaki", "#bdb76b"),
    ("darkmagenta", "#8b008b"),
    ("darkolivegreen", "#556b2f"),
    ("darkorange", "#ff8c00"),
    ("darkorchid", "#9932cc"),
    ("darkred", "#8b0000"),
    ("darksalmon", "#e9967a"),
    ("darkseagreen", "#8fbc8f"),
    ("darkslateblue", "#483d8b"),
    ("darkslategray", "#2f4f4f"),
    ("darkslategrey", "#2f4f4f"),
    ("darkturquoise", "#00ced1"),
    ("darkviolet", "#9400d3"),
    ("deeppink", "#ff1493"),
    ("deepskyblue", "#00bfff"),
    ("dimgray", "#696969"),
    ("dimgrey", "#696969"),
    ("dodgerblue", "#1e90ff"),
    ("firebrick", "#b22222"),
    ("floralwhite", "#fffaf0"),
    ("forestgreen", "#228b22"),
    ("fuchsia", "#ff00ff"),
    ("gainsboro", "#dcdcdc"),
    ("ghostwhite", "#f8f8ff"),
    ("gold", "#ffd700"),
    ("goldenrod", "#daa520"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("greenyellow", "#adff2f"),
    ("grey", "#808080"),
    ("honeydew", "#f0fff0"),
    ("hotpink", "#ff69b4"),
    ("indianred", "#cd5c5c"),
    ("indigo", "#4b0082"),
    ("ivory", "#fffff0"),
    ("khaki", "#f0e68c"),
    ("lavender", "#e6e6fa"),
    ("lavenderblush", "#fff0f5"),
    ("lawngreen", "#7cfc00"),
    ("lemonchiffon", "#fffacd"),
    ("lightblue", "#add8e6"),
    ("lightcoral", "#f08080"),
    ("lightcyan", "#e0ffff"),
    ("lightgoldenrodyellow", "#fafad2"),
    ("lightgray", "#d3d3d3"),
    ("lightgreen", "#90ee90"),
    ("lightgrey", "#d3d3d3"),
    ("lightpink", "#ffb6c1"),
    ("lightsalmon", "#ffa07a"),
    ("lightseagreen", "#20b2aa"),
    ("lightskyblue", "#87cefa"),
    ("lightslategray", "#778899"),
    ("lightslategrey", "#778899"),
    ("lightsteelblue", "#b0c4de"),
    ("lightyellow", "#ffffe0"),
    ("lime", "#00ff00"),
    ("limegreen", "#32cd32"),
    ("linen", "#faf0e6"),
    ("magenta", "#ff00ff"),
    ("maroon", "#800000"),
    ("mediumaquamarine", "#66cdaa"),
    ("mediumblue", "#0000cd"),
    ("mediumorchid", "#ba55d3"),
    ("mediumpurple", "#9370db"),
    ("mediumseagreen", "#3cb371"),
    ("mediumslateblue", "#7b68ee"),
    ("mediumspringgreen", "#00fa9a"),
    ("mediumturquoise", "#48d1cc"),
    ("mediumvioletred", "#c71585"),
    ("midnightblue", "#191970"),
    ("mintcream", "#f5fffa"),
    ("mistyrose", "#ffe4e1"),
    ("moccasin", "#ffe4b5"),
    ("navajowhite", "#ffdead"),
    ("navy", "#000080"),
    ("oldlace", "#fdf5e6"),
    ("olive", "#808000"),
    ("olivedrab", "#6b8e23"),
    ("orange", "#ffa500"),
    ("orangered", "#ff4500"),
    ("orchid", "#da70d6"),
    ("palegoldenrod", "#eee8aa"),
    ("palegreen", "#98fb98"),
    ("paleturquoise", "#afeeee"),
    ("palevioletred", "#db7093"),
    ("papayawhip", "#ffefd5"),
    ("peachpuff", "#ffdab9"),
    ("peru", "#cd853f"),
    ("pink", "#ffc0cb"),
    ("plum", "#dda0dd"),
    ("powderblue", "#b0e0e6"),
    ("purple", "#800080"),
    ("rebeccapurple", "#663399"),
    ("red", "#ff0000"),
    ("rosybrown", "#bc8f8f"),
    ("royalblue", "#4169e1"),
    ("saddlebrown", "#8b4513"),
    ("salmon", "#fa8072"),
    ("sandybrown", "#f4a460"),
    ("seagreen", "#2e8b57"),
    ("seashell", "#fff5ee"),
    ("sienna", "#a0522d"),
    ("silver", "#c0c0c0"),
    ("skyblue", "#87ceeb"),
    ("slateblue", "#6a5acd"),
    ("slategray", "#708090"),
    ("slategrey", "#708090"),
    ("snow", "#fffafa"),
    ("springgreen", "#00ff7f"),
    ("steelblue", "#4682b4"),
    ("tan", "#d2b48c"),
    ("teal", "#008080"),
    ("thistle", "#d8bfd8"),
    ("tomato", "#ff6347"),
    ("turquoise", "#40e0d0"),
    ("violet", "#ee82ee"),
    ("wheat", "#f5deb3"),
    ("white", "#ffffff"),
    ("whitesmoke", "#f5f5f5"),
    ("yellow", "#ffff00"),
    ("yellowgreen", "#9acd32"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_table_is_sorted() {
        assert!(CSS_COLORS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn names_resolve_to_hex() {
        assert_eq!(normalize_color(&CssColors, "crimson"), "#dc143c");
        assert_eq!(normalize_color(&CssColors, "Light Gray"), "#d3d3d3");
        assert_eq!(normalize_color(&CssColors, "#abc"), "#aabbcc");
    }

    #[test]
    fn hex_is_idempotent() {
        assert_eq!(normalize_color(&CssColors, "#1e90ff"), "#1e90ff");
        assert_eq!(normalize_color(&CssColors, "#1E90FF"), "#1E90FF");
        let once = normalize_color(&CssColors, "dodgerblue");
        assert_eq!(normalize_color(&CssColors, &once), once);
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(normalize_color(&CssColors, "not-a-color"), "not-a-color");
        assert_eq!(normalize_color(&CssColors, "#12345"), "#12345");
    }

    #[test]
    fn palette_with_and_without_fallback() {
        let palette = PaletteColors::new().with("Accent", "#ff8800");
        assert_eq!(normalize_color(&palette, "accent"), "#ff8800");
        assert_eq!(normalize_color(&palette, "red"), "red");

        let palette = palette.with_css_fallback();
        assert_eq!(normalize_color(&palette, "red"), "#ff0000");
        assert_eq!(palette.len(), 1);
    }
}
