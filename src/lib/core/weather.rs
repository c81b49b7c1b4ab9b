use chrono::{DateTime, Utc};
use rocket::serde::{Deserialize, Serialize};

/// Last known weather for one city.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct Weather {
    pub city: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub updated_at: DateTime<Utc>,
}

impl Weather {
    /// Builds a record stamped with the current time.
    pub fn new(city: String, temperature: f64) -> Weather {
        Weather::at(city, temperature, Utc::now())
    }

    pub fn at(city: String, temperature: f64, updated_at: DateTime<Utc>) -> Weather {
        Weather {
            city,
            temperature,
            updated_at,
        }
    }
}

/// Body of an update request. The server takes the city from the path and
/// the timestamp from its own clock, so only the temperature is used.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct WeatherUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default)]
    pub temperature: f64,
}

impl WeatherUpdate {
    pub fn new(temperature: f64) -> WeatherUpdate {
        WeatherUpdate {
            city: None,
            temperature,
        }
    }

    pub fn into_weather(self, city: String) -> Weather {
        Weather::new(city, self.temperature)
    }
}
