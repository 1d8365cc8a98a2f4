//! Style records and style resolution for gridglyph.
//!
//! Every glyph (tag, progress bar, icon) is drawn from a fully resolved
//! [`Style`]. Callers rarely build one by hand; instead they describe what
//! differs from a base style with [`StyleOverrides`] and let a
//! [`StyleResolver`] produce the complete record:
//!
//! - fields present in the overrides win, everything else comes from the base
//! - color names are normalized to `#rrggbb` through a [`ColorResolver`]
//! - symbolic font weights (`"bold"`, `"light"`, ...) become numeric weights
//!
//! # Example
//!
//! ```
//! use gridglyph_style::prelude::*;
//!
//! let resolver = StyleResolver::new();
//! let style = resolver.resolve(
//!     None,
//!     &StyleOverrides::new().foreground("white").weight("bold"),
//! );
//!
//! assert_eq!(style.foreground, "#ffffff");
//! assert_eq!(style.weight, FontWeight::Numeric(700));
//! ```
//!
//! Overrides can also be read leniently from TOML, which is how the
//! configuration file feeds named styles into a [`StyleBook`]:
//!
//! ```
//! use gridglyph_style::prelude::*;
//!
//! let book = StyleBook::from_toml_str(r#"
//!     [alert]
//!     foreground = "crimson"
//!     thickness = 0
//! "#).unwrap();
//!
//! assert!(book.get("alert").is_some());
//! ```

pub mod color;
pub mod resolve;
pub mod style;
pub mod weight;

mod error;

pub use color::{ColorResolver, CssColors, PaletteColors};
pub use error::{Error, Result};
pub use resolve::StyleResolver;
pub use style::{Style, StyleBook, StyleOverrides};
pub use weight::FontWeight;

/// Target names for log filtering.
pub mod targets {
    /// Style resolution target.
    pub const RESOLVE: &str = "gridglyph_style::resolve";
    /// Lenient override parsing target.
    pub const OVERRIDES: &str = "gridglyph_style::overrides";
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::{ColorResolver, CssColors, PaletteColors, normalize_color};
    pub use crate::resolve::StyleResolver;
    pub use crate::style::{Style, StyleBook, StyleOverrides};
    pub use crate::weight::FontWeight;
}
