//! Text grid and font measurements.
//!
//! Glyphs are sized in character cells of the host's text grid, and tag
//! labels are positioned using the metrics of the label font. Both come from
//! a [`FontMetrics`] implementation:
//!
//! - [`FixedMetrics`] uses explicit numbers and never touches the system
//! - [`SystemFontMetrics`] measures installed fonts through `fontdb`

use std::path::Path;

use fontdb::{Database, Family, Query, Stretch, Style as FontStyle, Weight};

use crate::targets;

/// Portion of the font size above the baseline when a font cannot be measured.
const FALLBACK_ASCENT: f32 = 0.8;
/// Monospace advance as a portion of the font size when a font cannot be measured.
const FALLBACK_ADVANCE: f32 = 0.6;

/// Size of one character cell of the text grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub char_width: f32,
    pub char_height: f32,
}

impl CellMetrics {
    /// Create cell metrics.
    pub const fn new(char_width: f32, char_height: f32) -> Self {
        Self {
            char_width,
            char_height,
        }
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(8.0, 17.0)
    }
}

/// Measurements of one font at one size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontInfo {
    /// The font size used for the `font-size` attribute.
    pub size: f32,
    /// Distance from the top of the line to the baseline.
    pub ascent: f32,
    /// Advance width of one glyph.
    pub char_width: f32,
}

impl FontInfo {
    /// Estimate the measurements of a monospace font of `size` pixels.
    pub fn estimate(size: f32) -> Self {
        Self {
            size,
            ascent: size * FALLBACK_ASCENT,
            char_width: size * FALLBACK_ADVANCE,
        }
    }
}

/// Source of text grid and font measurements.
pub trait FontMetrics: Send + Sync {
    /// The size of one cell of the text grid.
    fn cell_metrics(&self) -> CellMetrics;

    /// Measure `family` at `size` pixels.
    fn font_info(&self, family: &str, size: f32) -> FontInfo;
}

impl<M: FontMetrics + ?Sized> FontMetrics for std::sync::Arc<M> {
    fn cell_metrics(&self) -> CellMetrics {
        (**self).cell_metrics()
    }

    fn font_info(&self, family: &str, size: f32) -> FontInfo {
        (**self).font_info(family, size)
    }
}

/// Metrics from explicit numbers.
///
/// Font measurements are either a fixed [`FontInfo`] or, by default, an
/// estimate scaled from the requested size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedMetrics {
    cell: CellMetrics,
    font: Option<FontInfo>,
}

impl FixedMetrics {
    /// Create metrics for the given cell size.
    pub fn new(char_width: f32, char_height: f32) -> Self {
        Self {
            cell: CellMetrics::new(char_width, char_height),
            font: None,
        }
    }

    /// Report `font` for every family and size.
    #[must_use]
    pub fn with_font(mut self, font: FontInfo) -> Self {
        self.font = Some(font);
        self
    }
}

impl FontMetrics for FixedMetrics {
    fn cell_metrics(&self) -> CellMetrics {
        self.cell
    }

    fn font_info(&self, _family: &str, size: f32) -> FontInfo {
        self.font.unwrap_or_else(|| FontInfo::estimate(size))
    }
}

/// Metrics measured from fonts installed on the system.
///
/// Families are looked up by name with a monospace fallback. When no face
/// matches, or the face cannot be parsed, the measurements are estimated the
/// same way as [`FixedMetrics`].
pub struct SystemFontMetrics {
    db: Database,
    cell: CellMetrics,
}

impl SystemFontMetrics {
    /// Load system fonts and use `cell` as the grid size.
    ///
    /// Loading takes a noticeable moment on systems with many fonts.
    pub fn new(cell: CellMetrics) -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!(target: targets::METRICS, faces = db.len(), "loaded system fonts");
        Self { db, cell }
    }

    /// Use an existing font database.
    pub fn with_database(db: Database, cell: CellMetrics) -> Self {
        Self { db, cell }
    }

    /// Load system fonts and derive the grid from the terminal font.
    ///
    /// The cell is one advance wide and one line (ascent, descent and line
    /// gap) tall.
    pub fn for_grid_font(family: &str, size: f32) -> Self {
        let mut metrics = Self::new(CellMetrics::default());
        if let Some(face) = metrics.measure(family, size) {
            metrics.cell = CellMetrics::new(face.info.char_width, face.line_height);
        } else {
            let estimate = FontInfo::estimate(size);
            metrics.cell = CellMetrics::new(estimate.char_width, size * 1.2);
        }
        metrics
    }

    /// Load every font file in `path` as well.
    pub fn load_fonts_dir(&mut self, path: impl AsRef<Path>) {
        self.db.load_fonts_dir(path);
    }

    /// The underlying font database.
    pub fn database(&self) -> &Database {
        &self.db
    }

    fn measure(&self, family: &str, size: f32) -> Option<MeasuredFace> {
        let families = [Family::Name(family), Family::Monospace];
        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: FontStyle::Normal,
        };
        let id = self.db.query(&query)?;

        self.db
            .with_face_data(id, |data, face_index| {
                let face = ttf_parser::Face::parse(data, face_index).ok()?;
                let units_per_em = f32::from(face.units_per_em());
                if units_per_em <= 0.0 {
                    return None;
                }
                let scale = size / units_per_em;

                let advance = ['0', 'M']
                    .into_iter()
                    .filter_map(|c| face.glyph_index(c))
                    .find_map(|glyph| face.glyph_hor_advance(glyph))?;

                let ascender = f32::from(face.ascender());
                let descender = f32::from(face.descender());
                let line_gap = f32::from(face.line_gap());

                Some(MeasuredFace {
                    info: FontInfo {
                        size,
                        ascent: ascender * scale,
                        char_width: f32::from(advance) * scale,
                    },
                    line_height: (ascender - descender + line_gap) * scale,
                })
            })
            .flatten()
    }
}

struct MeasuredFace {
    info: FontInfo,
    line_height: f32,
}

impl FontMetrics for SystemFontMetrics {
    fn cell_metrics(&self) -> CellMetrics {
        self.cell
    }

    fn font_info(&self, family: &str, size: f32) -> FontInfo {
        match self.measure(family, size) {
            Some(face) => face.info,
            None => {
                tracing::debug!(target: targets::METRICS, family, size, "font not measurable, estimating");
                FontInfo::estimate(size)
            }
        }
    }
}

impl std::fmt::Debug for SystemFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemFontMetrics")
            .field("faces", &self.db.len())
            .field("cell", &self.cell)
            .finish()
    }
}
