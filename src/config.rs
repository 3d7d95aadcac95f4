//! Configuration for the Skycast dashboard, loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SKYCAST_API_KEY` - OpenWeatherMap API key
//!
//! ## Optional
//! - `SKYCAST_BASE_URL` - Weather API base URL
//!   (default: <https://api.openweathermap.org/data/2.5>)
//! - `SKYCAST_FAVORITES_PATH` - Favorites file location (default: favorites.json)
//! - `SKYCAST_TIMEOUT_SECONDS` - HTTP request timeout (default: 30)
//!
//! A local `.env` file is honored for development convenience.

use crate::SkycastError;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// OpenWeatherMap API key
    pub api_key: String,
    /// Base URL for the weather API
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_seconds: u32,
    /// Path of the persisted favorites file
    pub favorites_path: PathBuf,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_favorites_path() -> PathBuf {
    PathBuf::from("favorites.json")
}

impl DashboardConfig {
    /// Load configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let api_key = env::var("SKYCAST_API_KEY")
            .map_err(|_| SkycastError::config("SKYCAST_API_KEY is not set"))?;

        let base_url = env::var("SKYCAST_BASE_URL").unwrap_or_else(|_| default_base_url());

        let timeout_seconds = match env::var("SKYCAST_TIMEOUT_SECONDS") {
            Ok(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("Invalid SKYCAST_TIMEOUT_SECONDS: {raw}"))?,
            Err(_) => default_timeout(),
        };

        let favorites_path = env::var("SKYCAST_FAVORITES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_favorites_path());

        let config = Self {
            api_key,
            base_url,
            timeout_seconds,
            favorites_path,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(SkycastError::config(
                "Weather API key cannot be empty. Set SKYCAST_API_KEY to a valid key.",
            )
            .into());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(
                SkycastError::config("Weather API base URL must be an HTTP or HTTPS URL").into(),
            );
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            return Err(SkycastError::config(
                "HTTP timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> DashboardConfig {
        DashboardConfig {
            api_key: "valid_api_key_123".to_string(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            favorites_path: default_favorites_path(),
        }
    }

    #[test]
    fn test_defaults() {
        let config = test_config();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.favorites_path, PathBuf::from("favorites.json"));
    }

    #[test]
    fn test_validation_accepts_valid_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_api_key() {
        let mut config = test_config();
        config.api_key = "  ".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }

    #[test]
    fn test_validation_bad_base_url() {
        let mut config = test_config();
        config.base_url = "ftp://weather.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_timeout_range() {
        let mut config = test_config();
        config.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }
}
