//! Font weight values.

use std::fmt;

/// Symbolic weight names and their numeric equivalents.
///
/// Lookups ignore case as well as `-`, `_` and spaces, so `"Extra-Bold"`
/// finds `extrabold`.
const WEIGHT_NAMES: &[(&str, u16)] = &[
    ("thin", 100),
    ("hairline", 100),
    ("ultralight", 200),
    ("extralight", 200),
    ("light", 300),
    ("semilight", 350),
    ("regular", 400),
    ("normal", 400),
    ("book", 400),
    ("medium", 500),
    ("semibold", 600),
    ("demibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("ultrabold", 800),
    ("black", 900),
    ("heavy", 900),
    ("ultraheavy", 900),
];

/// A font weight as written into the SVG `font-weight` attribute.
///
/// Resolved styles carry [`FontWeight::Numeric`] whenever the weight is
/// known. A name outside the vocabulary stays [`FontWeight::Named`] and is
/// handed to the renderer as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// A numeric weight, normally 100-900.
    Numeric(u16),
    /// A symbolic weight that has not been translated.
    Named(String),
}

impl FontWeight {
    /// Regular weight (400).
    pub const REGULAR: Self = Self::Numeric(400);
    /// Bold weight (700).
    pub const BOLD: Self = Self::Numeric(700);

    /// Look up the numeric value of a symbolic weight name.
    pub fn lookup(name: &str) -> Option<u16> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        WEIGHT_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, weight)| *weight)
    }

    /// Translate a symbolic weight into its numeric form.
    ///
    /// Numeric weights and unknown names come back unchanged. A name that
    /// is itself a number (`"550"`) becomes numeric.
    pub fn normalized(&self) -> Self {
        match self {
            Self::Numeric(_) => self.clone(),
            Self::Named(name) => {
                if let Some(weight) = Self::lookup(name) {
                    Self::Numeric(weight)
                } else if let Ok(weight) = name.trim().parse::<u16>() {
                    Self::Numeric(weight)
                } else {
                    self.clone()
                }
            }
        }
    }

    /// The numeric weight, if known.
    pub fn numeric(&self) -> Option<u16> {
        match self.normalized() {
            Self::Numeric(weight) => Some(weight),
            Self::Named(_) => None,
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(weight) => write!(f, "{weight}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl From<u16> for FontWeight {
    fn from(weight: u16) -> Self {
        Self::Numeric(weight)
    }
}

impl From<i32> for FontWeight {
    fn from(weight: i32) -> Self {
        match u16::try_from(weight) {
            Ok(weight) => Self::Numeric(weight),
            Err(_) => Self::Named(weight.to_string()),
        }
    }
}

impl From<&str> for FontWeight {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for FontWeight {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}
