//! Error types for the review service

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the review service
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Malformed or missing input (blank text, unknown sentiment label)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The storage engine rejected a read or write
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The write produced no usable identifier, or a stored row is unreadable
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not a reviews directory: {0}")]
    NotInitialized(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ReviewError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReviewError::Validation(_) => 2,
            ReviewError::NotInitialized(_) => 3,
            ReviewError::Database(_) | ReviewError::Persistence(_) => 4,
            _ => 1,
        }
    }

    /// True when the caller supplied bad input
    pub fn is_validation(&self) -> bool {
        matches!(self, ReviewError::Validation(_))
    }

    /// True when storage failed to write, read, or assign an identifier
    pub fn is_persistence(&self) -> bool {
        matches!(self, ReviewError::Database(_) | ReviewError::Persistence(_))
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ReviewError::NotInitialized(path) => {
                format!(
                    "Not a reviews directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'reviews init' in this directory to create a review store\n\
                    • Navigate to an existing reviews directory\n\
                    • Set REVIEWS_ROOT environment variable to your store path",
                    path.display()
                )
            }
            ReviewError::Validation(msg) => {
                if msg.contains("Invalid sentiment") {
                    format!(
                        "{}\n\n\
                        Example: reviews list --sentiment positive",
                        msg
                    )
                } else {
                    format!(
                        "{}\n\n\
                        Example: reviews add \"Я люблю этот продукт\"",
                        msg
                    )
                }
            }
            ReviewError::Database(_) | ReviewError::Persistence(_) => {
                format!(
                    "{}\n\n\
                    Check that the database file exists, is readable and writable, \
                    and is not locked by another process.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ReviewError
pub type Result<T> = std::result::Result<T, ReviewError>;
