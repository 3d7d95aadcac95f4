//! Dashboard context object: orchestrates the weather client and the
//! favorites store.
//!
//! Every mutation persists the favorites file before returning, so the
//! on-disk list always matches what the user was last shown.

use crate::config::DashboardConfig;
use crate::favorites::{Favorites, FavoritesStore};
use crate::models::WeatherReading;
use crate::weather::WeatherClient;
use anyhow::Result;

/// Outcome of an `add_favorite` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// City validated against the weather API and appended
    Added,
    /// City was already a favorite; list unchanged
    AlreadyFavorite,
    /// Weather lookup failed, so the city was not added
    UnknownCity,
}

/// Outcome of a `remove_favorite` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// City removed from the list
    Removed,
    /// City was not a favorite; list unchanged
    NotFavorite,
}

/// Owns the favorites list, its store, and the weather client
pub struct Dashboard {
    client: WeatherClient,
    store: FavoritesStore,
    favorites: Favorites,
}

impl Dashboard {
    /// Build a dashboard from configuration, loading persisted favorites.
    ///
    /// A missing favorites file is the normal first-run state; a
    /// malformed one is fatal.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let client = WeatherClient::new(config)?;
        let store = FavoritesStore::new(&config.favorites_path);
        let favorites = store.load()?;

        Ok(Self {
            client,
            store,
            favorites,
        })
    }

    /// Fetch current weather for a city. `Ok(None)` means the city was
    /// rejected by the weather API.
    pub fn show_weather(&self, city: &str) -> Result<Option<WeatherReading>> {
        self.client.current_weather(city)
    }

    /// Validate a city against the weather API, then add it to the
    /// favorites and persist.
    pub fn add_favorite(&mut self, city: &str) -> Result<AddOutcome> {
        if self.client.current_weather(city)?.is_none() {
            return Ok(AddOutcome::UnknownCity);
        }

        if !self.favorites.insert(city) {
            return Ok(AddOutcome::AlreadyFavorite);
        }

        self.store.save(&self.favorites)?;
        Ok(AddOutcome::Added)
    }

    /// Remove a city from the favorites and persist.
    pub fn remove_favorite(&mut self, city: &str) -> Result<RemoveOutcome> {
        if !self.favorites.remove(city) {
            return Ok(RemoveOutcome::NotFavorite);
        }

        self.store.save(&self.favorites)?;
        Ok(RemoveOutcome::Removed)
    }

    /// Favorite cities in ascending lexicographic order
    #[must_use]
    pub fn list_favorites(&self) -> &[String] {
        self.favorites.cities()
    }

    /// Whether any favorites are stored
    #[must_use]
    pub fn has_favorites(&self) -> bool {
        !self.favorites.is_empty()
    }
}
