use std::collections::HashMap;

use log::debug;
use parking_lot::RwLock;

use crate::core::weather::Weather;

/// In-memory weather records keyed by city.
///
/// A single store-wide lock guards the map: lookups share it, upserts take it
/// exclusively. Records are replaced whole, so a reader sees either the old or
/// the new record and never a mix of the two.
#[derive(Debug, Default)]
pub struct WeatherStore {
    entries: RwLock<HashMap<String, Weather>>,
}

impl WeatherStore {
    pub fn new() -> WeatherStore {
        WeatherStore::default()
    }

    /// Returns a snapshot of the record for `city`, if one was ever stored.
    pub fn get(&self, city: &str) -> Option<Weather> {
        self.entries.read().get(city).cloned()
    }

    /// Inserts or replaces the record keyed by `weather.city`.
    pub fn put(&self, weather: Weather) {
        debug!("Storing {:?}", weather);
        let mut lock = self.entries.write();
        lock.insert(weather.city.clone(), weather);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
