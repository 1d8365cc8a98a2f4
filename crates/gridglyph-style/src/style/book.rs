//! Named style presets.

use std::collections::BTreeMap;

use toml::{Table, Value};

use super::overrides::StyleOverrides;
use crate::error::{Error, Result};

/// A collection of named style presets.
///
/// Each preset is a [`StyleOverrides`] applied over the default style before
/// any per-call overrides, so `"alert"` can mean "red background, bold" in
/// one place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBook {
    styles: BTreeMap<String, StyleOverrides>,
}

impl StyleBook {
    /// Create an empty style book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named preset, replacing any previous one with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, style: StyleOverrides) -> Self {
        self.insert(name, style);
        self
    }

    /// Add a named preset, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        style: StyleOverrides,
    ) -> Option<StyleOverrides> {
        self.styles.insert(name.into(), style)
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&StyleOverrides> {
        self.styles.get(name)
    }

    /// Names of all presets, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check whether the book has no presets.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Build a style book from a table of tables.
    ///
    /// Every top-level entry must be a table; its content is read leniently
    /// by [`StyleOverrides::from_table`].
    pub fn from_table(table: &Table) -> Result<Self> {
        let mut book = Self::new();
        for (name, value) in table {
            let Value::Table(entries) = value else {
                return Err(Error::NotATable { name: name.clone() });
            };
            book.insert(name.clone(), StyleOverrides::from_table(entries));
        }
        Ok(book)
    }

    /// Parse a style book from TOML text with one `[name]` table per preset.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: Table = source.parse()?;
        Self::from_table(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_presets() {
        let book = StyleBook::from_toml_str(
            r#"
            [alert]
            background = "crimson"
            foreground = "white"

            [quiet]
            thickness = 0
            "#,
        )
        .unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.names().collect::<Vec<_>>(), ["alert", "quiet"]);
        assert_eq!(
            book.get("alert").and_then(|s| s.background.as_deref()),
            Some("crimson")
        );
        assert_eq!(book.get("quiet").and_then(|s| s.thickness), Some(0.0));
    }

    #[test]
    fn non_table_entry_is_rejected() {
        let err = StyleBook::from_toml_str("alert = 3").unwrap_err();
        assert!(matches!(err, Error::NotATable { name } if name == "alert"));
    }
}
