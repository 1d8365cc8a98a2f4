//! Render a handful of glyphs to SVG and PNG files.
//!
//! Run with: cargo run -p gridglyph --example badges -- [output-dir]
//!
//! Set `RUST_LOG=gridglyph_icons=debug` to watch cache hits and fetches.

use std::path::PathBuf;

use gridglyph::{Glyphs, Rasterizer, StyleOverrides};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("gridglyph-badges"));
    std::fs::create_dir_all(&out)?;

    let glyphs = Glyphs::new()?;
    let rasterizer = Rasterizer::new();

    let alert = StyleOverrides::new()
        .foreground("white")
        .background("crimson")
        .stroke("darkred")
        .weight("bold");

    let images = [
        ("tag-todo", glyphs.make_tag("TODO", None, &StyleOverrides::new())?),
        ("tag-alert", glyphs.make_tag("FAIL", None, &alert)?),
        (
            "progress-42",
            glyphs.make_progress_bar(0.42, None, &StyleOverrides::new().width(12.0))?,
        ),
        (
            "icon-star",
            glyphs.make_icon("material", "star", None, &StyleOverrides::new().foreground("goldenrod"))?,
        ),
    ];

    for (name, image) in &images {
        std::fs::write(out.join(format!("{name}.svg")), image.to_svg_string())?;
        std::fs::write(out.join(format!("{name}.png")), image.to_png(&rasterizer)?)?;
        tracing::info!(name, width = image.document().width(), "wrote glyph");
    }

    println!("Wrote {} glyphs to {}", images.len(), out.display());
    Ok(())
}
