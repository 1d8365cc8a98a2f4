//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading style tables.
///
/// Resolution itself never fails; only turning text into a table can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The style source was not valid TOML.
    #[error("Style table parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A named style entry was not a table.
    #[error("Style '{name}' must be a table of properties")]
    NotATable { name: String },
}
