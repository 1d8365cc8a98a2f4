//! Named icon collections.

use std::collections::BTreeMap;

use crate::error::{IconError, Result};

/// Placeholder replaced by the icon name in a URL template.
pub const PLACEHOLDER: &str = "%s";

/// The collections known out of the box.
pub const DEFAULT_COLLECTIONS: &[(&str, &str)] = &[
    ("bootstrap", "https://icons.getbootstrap.com/assets/icons/%s.svg"),
    (
        "material",
        "https://raw.githubusercontent.com/Templarian/MaterialDesign/master/svg/%s.svg",
    ),
    (
        "octicons",
        "https://raw.githubusercontent.com/primer/octicons/master/icons/%s-24.svg",
    ),
    ("boxicons", "https://boxicons.com/static/img/svg/regular/bx-%s.svg"),
];

/// Maps collection names to URL templates.
///
/// Templates are stored as given. The first `%s` is replaced by the icon
/// name; a template without one yields the same URL for every name, which
/// surfaces as a failed or wrong fetch rather than a registry error.
///
/// # Example
///
/// ```
/// use gridglyph_icons::CollectionRegistry;
///
/// let registry = CollectionRegistry::default()
///     .with("local", "file:///usr/share/icons/%s.svg");
///
/// assert_eq!(
///     registry.url_for("material", "star").unwrap(),
///     "https://raw.githubusercontent.com/Templarian/MaterialDesign/master/svg/star.svg"
/// );
/// assert!(registry.url_for("nonexistent", "x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRegistry {
    templates: BTreeMap<String, String>,
}

impl CollectionRegistry {
    /// Create a registry without any collection.
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Add a collection, replacing one with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(name, template);
        self
    }

    /// Add a collection, replacing one with the same name.
    ///
    /// Returns the previous template, if any.
    pub fn insert(&mut self, name: impl Into<String>, template: impl Into<String>) -> Option<String> {
        self.templates.insert(name.into(), template.into())
    }

    /// The URL template of a collection.
    pub fn template(&self, collection: &str) -> Option<&str> {
        self.templates.get(collection).map(String::as_str)
    }

    /// Check whether a collection is registered.
    pub fn contains(&self, collection: &str) -> bool {
        self.templates.contains_key(collection)
    }

    /// The URL of `name` in `collection`.
    pub fn url_for(&self, collection: &str, name: &str) -> Result<String> {
        self.template(collection)
            .map(|template| template.replacen(PLACEHOLDER, name, 1))
            .ok_or_else(|| IconError::UnknownCollection(collection.to_string()))
    }

    /// Collection names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for CollectionRegistry {
    fn default() -> Self {
        Self {
            templates: DEFAULT_COLLECTIONS
                .iter()
                .map(|(name, template)| (name.to_string(), template.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_registered() {
        let registry = CollectionRegistry::default();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["bootstrap", "boxicons", "material", "octicons"]);
        assert_eq!(
            registry.url_for("octicons", "star").unwrap(),
            "https://raw.githubusercontent.com/primer/octicons/master/icons/star-24.svg"
        );
        assert_eq!(
            registry.url_for("boxicons", "star").unwrap(),
            "https://boxicons.com/static/img/svg/regular/bx-star.svg"
        );
    }

    #[test]
    fn unknown_collection() {
        let err = CollectionRegistry::empty().url_for("bootstrap", "x").unwrap_err();
        assert!(matches!(err, IconError::UnknownCollection(ref c) if c == "bootstrap"));
    }

    #[test]
    fn templates_are_stored_as_given() {
        let mut registry = CollectionRegistry::empty();
        assert_eq!(registry.insert("none", "https://example.com/icon.svg"), None);
        assert_eq!(registry.insert("two", "https://example.com/%s/%s.svg"), None);
        assert_eq!(registry.len(), 2);

        assert_eq!(
            registry.url_for("none", "star").unwrap(),
            "https://example.com/icon.svg"
        );
        assert_eq!(
            registry.url_for("two", "star").unwrap(),
            "https://example.com/star/%s.svg"
        );
        assert_eq!(
            registry.insert("none", "https://example.org/%s.svg").as_deref(),
            Some("https://example.com/icon.svg")
        );
    }

    #[test]
    fn name_is_inserted_verbatim() {
        let registry = CollectionRegistry::empty()
            .with("odd", "https://example.com/%s.svg");
        assert_eq!(
            registry.url_for("odd", "100%s").unwrap(),
            "https://example.com/100%s.svg"
        );
    }
}
