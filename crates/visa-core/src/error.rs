//! Error types for the visa advisor.

use thiserror::Error;

use crate::profile::ProfileValidationError;

/// A shared error type for the visa advisor core.
///
/// The reply selector is total and never produces one of these; errors only
/// arise while capturing a profile or loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    /// A country name that is not part of the closed country list.
    #[error("Unknown country: '{0}'")]
    UnknownCountry(String),

    /// A purpose name that is not one of the six travel purposes.
    #[error("Unknown travel purpose: '{0}'")]
    UnknownPurpose(String),

    /// The profile form was submitted with missing fields.
    #[error(transparent)]
    InvalidProfile(#[from] ProfileValidationError),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdvisorError {
    /// Creates an UnknownCountry error
    pub fn unknown_country(name: impl Into<String>) -> Self {
        Self::UnknownCountry(name.into())
    }

    /// Creates an UnknownPurpose error
    pub fn unknown_purpose(name: impl Into<String>) -> Self {
        Self::UnknownPurpose(name.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Serialization { .. })
    }
}

impl From<std::io::Error> for AdvisorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for AdvisorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AdvisorError>`.
pub type Result<T> = std::result::Result<T, AdvisorError>;
