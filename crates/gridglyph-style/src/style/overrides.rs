//! Partial style records.

use toml::{Table, Value};

use super::record::Style;
use crate::targets;
use crate::weight::FontWeight;

/// A partial style: every field is optional.
///
/// Only the fields that are set take part in resolution; everything else
/// comes from the base style.
///
/// # Example
///
/// ```
/// use gridglyph_style::prelude::*;
///
/// let overrides = StyleOverrides::new()
///     .foreground("#ffffff")
///     .background("crimson")
///     .thickness(0.0);
///
/// assert!(!overrides.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub stroke: Option<String>,
    pub thickness: Option<f32>,
    pub radius: Option<f32>,
    pub padding: Option<f32>,
    pub margin: Option<f32>,
    pub width: Option<f32>,
    pub scale: Option<f32>,
    pub family: Option<String>,
    pub height: Option<f32>,
    pub weight: Option<FontWeight>,
}

macro_rules! setters {
    ($($field:ident: $arg:ty => $doc:literal),+ $(,)?) => {
        $(
            #[doc = $doc]
            #[must_use]
            pub fn $field(mut self, value: $arg) -> Self {
                self.$field = Some(value.into());
                self
            }
        )+
    };
}

macro_rules! for_each_field {
    ($mac:ident) => {
        $mac!(
            foreground, background, stroke, thickness, radius, padding, margin, width, scale,
            family, height, weight,
        )
    };
}

impl StyleOverrides {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    setters!(
        foreground: impl Into<String> => "Set the foreground color.",
        background: impl Into<String> => "Set the background color.",
        stroke: impl Into<String> => "Set the border color.",
        thickness: f32 => "Set the border thickness.",
        radius: f32 => "Set the corner radius.",
        padding: f32 => "Set the inner padding.",
        margin: f32 => "Set the margin, in character cells.",
        width: f32 => "Set the progress bar width, in character cells.",
        scale: f32 => "Set the icon scale factor.",
        family: impl Into<String> => "Set the font family.",
        height: f32 => "Set the font size.",
        weight: impl Into<FontWeight> => "Set the font weight.\n\nSymbolic names and numeric strings such as `\"550\"` resolve to numeric weights; any other name is kept as written.",
    );

    /// Check whether no field is set.
    pub fn is_empty(&self) -> bool {
        macro_rules! all_unset {
            ($($field:ident),+ $(,)?) => {
                $(self.$field.is_none())&&+
            };
        }
        for_each_field!(all_unset)
    }

    /// Merge another set of overrides into this one.
    ///
    /// Fields set in `other` replace the ones in `self`.
    pub fn merge(&mut self, other: &StyleOverrides) {
        macro_rules! merge_if_set {
            ($($field:ident),+ $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )+
            };
        }
        for_each_field!(merge_if_set);
    }

    /// Layer these overrides on top of a base style.
    ///
    /// This is the raw field merge; color and weight normalization happen in
    /// [`StyleResolver`](crate::StyleResolver).
    pub fn apply_to(&self, base: &Style) -> Style {
        let mut style = base.clone();
        macro_rules! take_if_set {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &self.$field {
                        style.$field = value.clone();
                    }
                )+
            };
        }
        for_each_field!(take_if_set);
        style
    }

    /// Read overrides from a TOML table.
    ///
    /// Reading is lenient: unknown keys and values of the wrong type are
    /// skipped and logged rather than reported.
    pub fn from_table(table: &Table) -> Self {
        let mut overrides = Self::new();

        for (key, value) in table {
            let accepted = match key.as_str() {
                "foreground" => set_string(&mut overrides.foreground, value),
                "background" => set_string(&mut overrides.background, value),
                "stroke" => set_string(&mut overrides.stroke, value),
                "family" => set_string(&mut overrides.family, value),
                "thickness" => set_number(&mut overrides.thickness, value),
                "radius" => set_number(&mut overrides.radius, value),
                "padding" => set_number(&mut overrides.padding, value),
                "margin" => set_number(&mut overrides.margin, value),
                "width" => set_number(&mut overrides.width, value),
                "scale" => set_number(&mut overrides.scale, value),
                "height" => set_number(&mut overrides.height, value),
                "weight" => set_weight(&mut overrides.weight, value),
                _ => {
                    tracing::debug!(target: targets::OVERRIDES, key, "ignoring unknown style key");
                    continue;
                }
            };

            if !accepted {
                tracing::warn!(
                    target: targets::OVERRIDES,
                    key,
                    value_type = value.type_str(),
                    "ignoring style value of unexpected type"
                );
            }
        }

        overrides
    }

    /// Parse overrides from TOML text.
    ///
    /// Only the syntax must be valid; the content is read as leniently as
    /// [`from_table`](Self::from_table).
    pub fn from_toml_str(source: &str) -> crate::Result<Self> {
        let table: Table = source.parse()?;
        Ok(Self::from_table(&table))
    }
}

fn set_string(slot: &mut Option<String>, value: &Value) -> bool {
    match value {
        Value::String(s) => {
            *slot = Some(s.clone());
            true
        }
        _ => false,
    }
}

fn set_number(slot: &mut Option<f32>, value: &Value) -> bool {
    match value {
        Value::Float(f) => {
            *slot = Some(*f as f32);
            true
        }
        Value::Integer(i) => {
            *slot = Some(*i as f32);
            true
        }
        _ => false,
    }
}

fn set_weight(slot: &mut Option<FontWeight>, value: &Value) -> bool {
    match value {
        Value::String(name) => {
            *slot = Some(FontWeight::Named(name.clone()));
            true
        }
        Value::Integer(weight) => match u16::try_from(*weight) {
            Ok(weight) => {
                *slot = Some(FontWeight::Numeric(weight));
                true
            }
            Err(_) => false,
        },
        _ => false,
    }
}
