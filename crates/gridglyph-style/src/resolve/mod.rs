//! Style resolution: base + named preset + overrides to a complete style.

mod resolver;

pub use resolver::StyleResolver;
