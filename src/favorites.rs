//! Favorite city list and its JSON persistence
//!
//! The on-disk format is a plain JSON array of city names. A missing
//! file is the normal first-run state, not an error.

use crate::SkycastError;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ordered, duplicate-free collection of favorite city names.
///
/// Uniqueness is case-sensitive and entries are kept in ascending
/// lexicographic order at all times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    cities: Vec<String>,
}

impl Favorites {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from raw entries, dropping duplicates and sorting
    #[must_use]
    pub fn from_cities(mut cities: Vec<String>) -> Self {
        cities.sort();
        cities.dedup();
        Self { cities }
    }

    /// Whether `city` is already a favorite (case-sensitive)
    #[must_use]
    pub fn contains(&self, city: &str) -> bool {
        self.cities.binary_search_by(|c| c.as_str().cmp(city)).is_ok()
    }

    /// Add a city, keeping the list sorted.
    ///
    /// Returns `false` without modifying the list when the city is
    /// already present.
    pub fn insert(&mut self, city: &str) -> bool {
        match self.cities.binary_search_by(|c| c.as_str().cmp(city)) {
            Ok(_) => false,
            Err(index) => {
                self.cities.insert(index, city.to_string());
                true
            }
        }
    }

    /// Remove a city. Returns `false` when it was not present.
    pub fn remove(&mut self, city: &str) -> bool {
        match self.cities.binary_search_by(|c| c.as_str().cmp(city)) {
            Ok(index) => {
                self.cities.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// City names in ascending lexicographic order
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Number of favorites
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Loads and saves the favorites file
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Create a store for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted favorites file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the favorites file.
    ///
    /// A missing file yields an empty list; any other read or parse
    /// failure is fatal.
    pub fn load(&self) -> Result<Favorites> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No favorites file at {}, starting empty", self.path.display());
                return Ok(Favorites::new());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read favorites file {}", self.path.display())
                });
            }
        };

        let cities: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
            SkycastError::storage(format!(
                "{} is not a JSON array of city names: {e}",
                self.path.display()
            ))
        })?;

        info!("Loaded {} favorites from {}", cities.len(), self.path.display());
        Ok(Favorites::from_cities(cities))
    }

    /// Overwrite the favorites file with the given list.
    ///
    /// Writes to a sibling temp file and renames it over the target, so
    /// a concurrent `load()` never observes a partial write.
    pub fn save(&self, favorites: &Favorites) -> Result<()> {
        let json = serde_json::to_string_pretty(favorites.cities())
            .with_context(|| "Failed to serialize favorites")?;

        let mut tmp_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| {
                SkycastError::storage(format!("Invalid favorites path {}", self.path.display()))
            })?;
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, json).with_context(|| {
            format!("Failed to write favorites to {}", tmp_path.display())
        })?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!("Failed to replace favorites file {}", self.path.display())
        })?;

        debug!("Saved {} favorites to {}", favorites.len(), self.path.display());
        Ok(())
    }
}
