//! The glyph factory.

use std::sync::{Arc, OnceLock};

use gridglyph_icons::{ByteStore, DiskStore, IconLibrary, MemoryStore};
use gridglyph_net::{Fetcher, HttpClientBuilder};
use gridglyph_render::{
    ComposeOptions, FixedMetrics, FontMetrics, IconDocument, Image, SystemFontMetrics,
    compose_icon, compose_progress, compose_tag,
};
use gridglyph_style::{ColorResolver, Style, StyleOverrides, StyleResolver};

use crate::config::GlyphConfig;
use crate::error::{ConfigError, Result};
use crate::targets;

/// Global instance built from the default configuration.
static GLOBAL: OnceLock<Glyphs> = OnceLock::new();

/// Makes tags, progress bars and icons.
///
/// A `Glyphs` owns everything a glyph needs: the style resolver with its
/// default style and named presets, the text grid metrics, and the icon
/// library. It is immutable after construction and can be shared between
/// threads.
///
/// # Example
///
/// ```
/// use gridglyph::prelude::*;
///
/// let glyphs = Glyphs::builder()
///     .metrics(FixedMetrics::new(8.0, 16.0))
///     .store(MemoryStore::new())
///     .build()?;
///
/// let tag = glyphs.make_tag("TODO", None, &StyleOverrides::new().background("gold"))?;
/// assert!(tag.to_svg_string().contains(r##"fill="#ffd700""##));
///
/// let bar = glyphs.make_progress_bar(0.25, None, &StyleOverrides::new())?;
/// assert_eq!(bar.document().width(), 168.0);
/// # Ok::<(), gridglyph::Error>(())
/// ```
pub struct Glyphs {
    resolver: StyleResolver,
    metrics: Arc<dyn FontMetrics>,
    icons: IconLibrary,
    compose: ComposeOptions,
}

impl Glyphs {
    /// Build glyphs from the default configuration file.
    pub fn new() -> Result<Self> {
        Self::from_config(GlyphConfig::load_default()?)
    }

    /// Build glyphs from a configuration.
    pub fn from_config(config: GlyphConfig) -> Result<Self> {
        GlyphsBuilder::new().config(config).build()
    }

    /// Create a builder.
    pub fn builder() -> GlyphsBuilder {
        GlyphsBuilder::new()
    }

    /// The process-wide instance, built on first use from the default
    /// configuration file.
    ///
    /// If building fails, the error is returned and a later call tries again.
    pub fn global() -> Result<&'static Glyphs> {
        if let Some(glyphs) = GLOBAL.get() {
            return Ok(glyphs);
        }
        let glyphs = Self::new()?;
        Ok(GLOBAL.get_or_init(|| glyphs))
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    pub fn metrics(&self) -> &dyn FontMetrics {
        self.metrics.as_ref()
    }

    pub fn icons(&self) -> &IconLibrary {
        &self.icons
    }

    pub fn compose_options(&self) -> ComposeOptions {
        self.compose
    }

    /// Resolve a complete style; see [`StyleResolver::resolve`].
    pub fn resolve(&self, style: Option<&Style>, overrides: &StyleOverrides) -> Style {
        self.resolver.resolve(style, overrides)
    }

    /// Make a text tag.
    ///
    /// The tag is `len(label) + padding` cells wide, plus the margin.
    pub fn make_tag(
        &self,
        label: &str,
        style: Option<&Style>,
        overrides: &StyleOverrides,
    ) -> Result<Image> {
        let style = self.resolver.resolve(style, overrides);
        Ok(self.tag(label, &style))
    }

    /// Make a text tag from a named style.
    pub fn make_tag_named(
        &self,
        label: &str,
        style_name: &str,
        overrides: &StyleOverrides,
    ) -> Result<Image> {
        let style = self.resolver.resolve_named(style_name, overrides);
        Ok(self.tag(label, &style))
    }

    /// Make a progress bar filled to `value` (0 is empty, 1 is full).
    ///
    /// The bar is `width` cells wide, plus the margin. `value` is not
    /// clamped.
    pub fn make_progress_bar(
        &self,
        value: f32,
        style: Option<&Style>,
        overrides: &StyleOverrides,
    ) -> Result<Image> {
        let style = self.resolver.resolve(style, overrides);
        Ok(self.progress(value, &style))
    }

    /// Make a progress bar from a named style.
    pub fn make_progress_bar_named(
        &self,
        value: f32,
        style_name: &str,
        overrides: &StyleOverrides,
    ) -> Result<Image> {
        let style = self.resolver.resolve_named(style_name, overrides);
        Ok(self.progress(value, &style))
    }

    /// Make an icon badge, fetching the icon if it is not cached.
    ///
    /// The badge is two cells wide, plus the margin.
    pub fn make_icon(
        &self,
        collection: &str,
        name: &str,
        style: Option<&Style>,
        overrides: &StyleOverrides,
    ) -> Result<Image> {
        let icon = self.icons.get_icon(collection, name, false)?;
        let style = self.resolver.resolve(style, overrides);
        Ok(self.icon(&icon, &style))
    }

    /// Make an icon badge from a named style.
    pub fn make_icon_named(
        &self,
        collection: &str,
        name: &str,
        style_name: &str,
        overrides: &StyleOverrides,
    ) -> Result<Image> {
        let icon = self.icons.get_icon(collection, name, false)?;
        let style = self.resolver.resolve_named(style_name, overrides);
        Ok(self.icon(&icon, &style))
    }

    /// Get an icon's parsed document, fetching it when not cached or when
    /// `force_reload` is set.
    pub fn get_icon_data(
        &self,
        collection: &str,
        name: &str,
        force_reload: bool,
    ) -> Result<IconDocument> {
        Ok(self.icons.get_icon(collection, name, force_reload)?)
    }

    fn tag(&self, label: &str, style: &Style) -> Image {
        Image::new(compose_tag(style, self.metrics.as_ref(), label))
    }

    fn progress(&self, value: f32, style: &Style) -> Image {
        Image::new(compose_progress(style, self.metrics.as_ref(), value))
    }

    fn icon(&self, icon: &IconDocument, style: &Style) -> Image {
        Image::new(compose_icon(style, self.metrics.as_ref(), icon, self.compose))
    }
}

impl std::fmt::Debug for Glyphs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Glyphs")
            .field("resolver", &self.resolver)
            .field("cell", &self.metrics.cell_metrics())
            .field("icons", &self.icons)
            .field("compose", &self.compose)
            .finish()
    }
}

/// Builder for [`Glyphs`].
///
/// Anything not set explicitly comes from the configuration (the defaults
/// unless [`config`](Self::config) is called):
///
/// - metrics: the configured cell size, else measured from system fonts
/// - store: a [`DiskStore`] in the cache directory, else a [`MemoryStore`]
/// - fetcher: an HTTP client with the configured timeout and user agent
#[derive(Default)]
#[must_use]
pub struct GlyphsBuilder {
    config: GlyphConfig,
    metrics: Option<Arc<dyn FontMetrics>>,
    store: Option<Arc<dyn ByteStore>>,
    fetcher: Option<Arc<dyn Fetcher>>,
    colors: Option<Arc<dyn ColorResolver>>,
}

impl GlyphsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` for everything not set explicitly.
    pub fn config(mut self, config: GlyphConfig) -> Self {
        self.config = config;
        self
    }

    /// Use these grid and font metrics.
    pub fn metrics(mut self, metrics: impl FontMetrics + 'static) -> Self {
        self.metrics = Some(Arc::new(metrics));
        self
    }

    /// Store fetched icons here.
    pub fn store(mut self, store: impl ByteStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Fetch icons with this fetcher.
    pub fn fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    /// Fetch icons with a fetcher shared with the caller.
    pub fn shared_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Normalize color names with this table.
    pub fn colors(mut self, colors: impl ColorResolver + 'static) -> Self {
        self.colors = Some(Arc::new(colors));
        self
    }

    /// Build the glyph factory.
    ///
    /// # Errors
    ///
    /// Fails when the configuration has malformed named styles or collection
    /// templates, when the cache directory cannot be created, or when the
    /// HTTP client cannot be initialized.
    pub fn build(self) -> Result<Glyphs> {
        let config = self.config;

        let default_style = config.default_overrides().apply_to(&Style::default());
        let mut resolver = StyleResolver::new()
            .with_default_style(default_style)
            .with_style_book(config.style_book()?);
        if let Some(colors) = self.colors {
            resolver = resolver.with_shared_colors(colors);
        } else if let Some(palette) = config.palette() {
            resolver = resolver.with_colors(palette);
        }

        let metrics: Arc<dyn FontMetrics> = match (self.metrics, config.cell_metrics()) {
            (Some(metrics), _) => metrics,
            (None, Some(cell)) => Arc::new(FixedMetrics::new(cell.char_width, cell.char_height)),
            (None, None) => {
                let style = resolver.default_style();
                Arc::new(SystemFontMetrics::for_grid_font(&style.family, style.height))
            }
        };

        let store = match self.store {
            Some(store) => store,
            None => open_store(&config)?,
        };

        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpClientBuilder::from_config(config.http_client_config()).build()?),
        };

        let icons = IconLibrary::new(config.registry(), store, fetcher);
        let compose =
            ComposeOptions::new().with_preserve_original_fills(config.preserve_original_fills);

        tracing::debug!(target: targets::GLYPHS, cell = ?metrics.cell_metrics(), "glyphs ready");

        Ok(Glyphs {
            resolver,
            metrics,
            icons,
            compose,
        })
    }
}

fn open_store(config: &GlyphConfig) -> std::result::Result<Arc<dyn ByteStore>, ConfigError> {
    let Some(dir) = config.resolved_cache_dir() else {
        tracing::warn!(target: targets::GLYPHS, "no cache directory available, icons are kept in memory");
        return Ok(Arc::new(MemoryStore::new()));
    };

    DiskStore::new(&dir)
        .map(|store| Arc::new(store) as Arc<dyn ByteStore>)
        .map_err(|source| ConfigError::Io { path: dir, source })
}
