//! Weather data model and display methods

use serde::{Deserialize, Serialize};

/// A single current-conditions snapshot for one city.
///
/// Lives only for the duration of a lookup; never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReading {
    /// Temperature in Celsius
    pub temperature: f32,
    /// Perceived temperature in Celsius
    pub feels_like: f32,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f32,
}

impl WeatherReading {
    /// Render the fixed five-line report shown for a city lookup.
    #[must_use]
    pub fn report(&self, city: &str) -> String {
        format!(
            "{city} weather:\n\
             Temperature: {}°C\n\
             Feels like: {}°C\n\
             Conditions: {}\n\
             Humidity: {}%\n\
             Wind: {}m/s",
            self.temperature, self.feels_like, self.description, self.humidity, self.wind_speed
        )
    }
}
