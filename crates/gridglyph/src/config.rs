//! Configuration file support.
//!
//! Configuration is read from `config.toml` in the platform configuration
//! directory (for example `~/.config/gridglyph/config.toml` on Linux):
//!
//! ```toml
//! cache_dir = "/var/cache/gridglyph"
//! preserve_original_fills = false
//!
//! [style]
//! family = "Iosevka"
//! height = 13
//!
//! [styles.alert]
//! background = "crimson"
//! foreground = "white"
//!
//! [collections]
//! local = "file:///usr/share/icons/%s.svg"
//!
//! [colors]
//! accent = "#5e81ac"
//!
//! [http]
//! timeout_secs = 10
//!
//! [metrics]
//! char_width = 8
//! char_height = 17
//! ```
//!
//! Every section is optional. Style tables are read leniently: unknown keys
//! and values of the wrong type are ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use gridglyph_icons::CollectionRegistry;
use gridglyph_net::HttpClientConfig;
use gridglyph_render::CellMetrics;
use gridglyph_style::{PaletteColors, StyleBook, StyleOverrides};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::targets;

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE: &str = "config.toml";

/// HTTP settings for icon fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    /// Whole-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// User agent sent with every request.
    pub user_agent: Option<String>,
}

/// Fixed text grid measurements.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MetricsSection {
    pub char_width: f32,
    pub char_height: f32,
}

/// The contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Overrides applied to the built-in default style.
    pub style: toml::Table,
    /// Named style presets, one table each.
    pub styles: toml::Table,
    /// Extra or replaced icon collections.
    pub collections: BTreeMap<String, String>,
    /// Named colors, falling back to CSS names.
    pub colors: BTreeMap<String, String>,
    /// Where fetched icons are stored.
    pub cache_dir: Option<PathBuf>,
    /// Keep the fills of multi-color icons.
    pub preserve_original_fills: bool,
    pub http: HttpSection,
    /// Use these cell measurements instead of measuring system fonts.
    pub metrics: Option<MetricsSection>,
}

impl GlyphConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading configuration");
        Self::from_toml_str(&source)
    }

    /// Read the configuration file from the platform configuration directory.
    ///
    /// A missing file (or an unknown configuration directory) yields the
    /// defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Overrides for the default style.
    pub fn default_overrides(&self) -> StyleOverrides {
        StyleOverrides::from_table(&self.style)
    }

    /// The named style presets.
    pub fn style_book(&self) -> Result<StyleBook, ConfigError> {
        Ok(StyleBook::from_table(&self.styles)?)
    }

    /// The default collections plus the configured ones.
    ///
    /// Templates are taken as written; a template without `%s` only shows up
    /// as a failed fetch.
    pub fn registry(&self) -> CollectionRegistry {
        self.collections
            .iter()
            .fold(CollectionRegistry::default(), |registry, (name, template)| {
                registry.with(name.as_str(), template.as_str())
            })
    }

    /// The configured palette, if any colors are configured.
    pub fn palette(&self) -> Option<PaletteColors> {
        if self.colors.is_empty() {
            return None;
        }
        let palette = self
            .colors
            .iter()
            .fold(PaletteColors::new(), |palette, (name, hex)| palette.with(name, hex.as_str()));
        Some(palette.with_css_fallback())
    }

    /// HTTP client settings.
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig::default();
        if let Some(secs) = self.http.timeout_secs {
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(user_agent) = &self.http.user_agent {
            config.user_agent = Some(user_agent.clone());
        }
        config
    }

    /// Fixed cell metrics, if configured.
    pub fn cell_metrics(&self) -> Option<CellMetrics> {
        self.metrics
            .map(|m| CellMetrics::new(m.char_width, m.char_height))
    }

    /// The icon cache directory: configured, else the platform cache directory.
    pub fn resolved_cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir.clone().or_else(default_cache_dir)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "gridglyph")
}

/// Path of the configuration file in the platform configuration directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// The platform cache directory for fetched icons.
pub fn default_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("icons"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config = GlyphConfig::from_toml_str("").unwrap();
        assert_eq!(config, GlyphConfig::default());
        assert!(config.default_overrides().is_empty());
        assert!(config.palette().is_none());
        assert_eq!(config.registry(), CollectionRegistry::default());
    }

    #[test]
    fn full_config() {
        let config = GlyphConfig::from_toml_str(
            r##"
            cache_dir = "/tmp/icons"
            preserve_original_fills = true

            [style]
            family = "Iosevka"
            height = 13

            [styles.alert]
            background = "crimson"

            [collections]
            local = "file:///icons/%s.svg"

            [colors]
            accent = "#5e81ac"

            [http]
            timeout_secs = 5

            [metrics]
            char_width = 9
            char_height = 18.5
            "##,
        )
        .unwrap();

        assert_eq!(config.cache_dir.as_deref(), Some(Path::new("/tmp/icons")));
        assert!(config.preserve_original_fills);
        assert_eq!(config.default_overrides().family.as_deref(), Some("Iosevka"));
        assert_eq!(config.default_overrides().height, Some(13.0));
        assert!(config.style_book().unwrap().get("alert").is_some());
        assert!(config.registry().contains("local"));
        assert!(config.registry().contains("material"));
        assert!(config.palette().is_some());
        assert_eq!(config.http_client_config().timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.cell_metrics(), Some(CellMetrics::new(9.0, 18.5)));
    }

    #[test]
    fn collection_templates_are_not_validated() {
        let config = GlyphConfig::from_toml_str(
            r#"
            [collections]
            broken = "https://example.com/icon.svg"
            "#,
        )
        .unwrap();
        let registry = config.registry();
        assert_eq!(
            registry.url_for("broken", "star").unwrap(),
            "https://example.com/icon.svg"
        );
        assert_eq!(registry.len(), gridglyph_icons::DEFAULT_COLLECTIONS.len() + 1);
    }

    #[test]
    fn wrong_types_are_errors_outside_style_tables() {
        assert!(GlyphConfig::from_toml_str("cache_dir = 3").is_err());
        assert!(GlyphConfig::from_toml_str("[styles]\nalert = 1").unwrap().style_book().is_err());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GlyphConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
