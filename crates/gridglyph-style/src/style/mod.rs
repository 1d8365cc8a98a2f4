//! Style records, partial overrides, and named style presets.

mod book;
mod overrides;
mod record;

pub use book::StyleBook;
pub use overrides::StyleOverrides;
pub use record::{STYLE_KEYS, Style};
