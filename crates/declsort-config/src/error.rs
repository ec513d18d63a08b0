//! Error types for declsort-config

/// Result type for declsort-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when loading configuration
///
/// Unknown *tokens* inside a recognized setting are not errors; they are
/// dropped silently by the parser. An unrecognized setting *key* is a
/// contract violation and fails loudly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unrecognized setting key: {0}")]
    UnknownSetting(String),

    #[error("setting {key} expects a string or boolean, got {found}")]
    InvalidSettingValue { key: String, found: String },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
