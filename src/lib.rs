//! Skycast - console weather dashboard with favorite city tracking
//!
//! This library provides the weather lookup client, the JSON-persisted
//! favorites list, and the interactive menu loop that ties them together.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod favorites;
pub mod menu;
pub mod models;
pub mod weather;

// Re-export core types for public API
pub use config::DashboardConfig;
pub use dashboard::{AddOutcome, Dashboard, RemoveOutcome};
pub use error::SkycastError;
pub use favorites::{Favorites, FavoritesStore};
pub use menu::MenuChoice;
pub use models::WeatherReading;
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
