use log::{debug, warn};
use rocket::serde::json::{Error as JsonError, Json};
use rocket::State;

use crate::core::weather::{Weather, WeatherUpdate};
use crate::store::WeatherStore;

use super::city::City;
use super::error::ApiError;

#[get("/<city..>")]
pub fn get_weather(city: City, store: &State<WeatherStore>) -> Result<Json<Weather>, ApiError> {
    if city.is_empty() {
        warn!("Rejecting read without a city");
        return Err(ApiError::missing_city());
    }
    match store.get(city.as_str()) {
        Some(weather) => Ok(Json(weather)),
        None => {
            debug!("No weather stored for {}", city.as_str());
            Err(ApiError::not_found(city.as_str()))
        }
    }
}

/// Replaces the record for `city`. The path city and the server clock win over
/// whatever the body says.
#[put("/<city..>", data = "<body>")]
pub fn update_weather(
    city: City,
    body: Result<Json<WeatherUpdate>, JsonError<'_>>,
    store: &State<WeatherStore>,
) -> Result<Json<Weather>, ApiError> {
    if city.is_empty() {
        warn!("Rejecting update without a city");
        return Err(ApiError::missing_city());
    }
    let update = body.map_err(|e| {
        warn!("Invalid body for {}: {}", city.as_str(), e);
        ApiError::invalid_body()
    })?;

    let weather = update.into_inner().into_weather(city.into_inner());
    store.put(weather.clone());
    Ok(Json(weather))
}
