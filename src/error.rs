//! Error types and handling for the Skycast dashboard

use thiserror::Error;

/// Main error type for the Skycast application
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Favorites storage errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SkycastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::Config { .. } => {
                "Configuration error. Please check your environment and API key.".to_string()
            }
            SkycastError::Api { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            SkycastError::Storage { message } => {
                format!("Favorites file problem: {message}")
            }
            SkycastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
