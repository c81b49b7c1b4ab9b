//! HTTP client for the weather API.
//!
//! Reads and writes are deliberately asymmetric: a missing city is a normal
//! answer to a read (`Ok(None)`), while an update that does not come back
//! with `200 OK` is always an error.

mod config;

use std::ops::Range;
use std::time::Duration;

use log::debug;
use rand::Rng;
use reqwest::StatusCode;
use thiserror::Error;

use crate::api::BASE_PATH;
use crate::core::weather::{Weather, WeatherUpdate};

pub use config::ClientConfig;

pub const DEFAULT_TEMPERATURES: Range<f64> = -10.0..40.0;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{operation} weather for '{city}' returned status {status}")]
    UnexpectedStatus {
        operation: &'static str,
        city: String,
        status: StatusCode,
    },
}

pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(server_url: &str, timeout: Duration) -> Result<WeatherClient, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(WeatherClient {
            http,
            base_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<WeatherClient, ClientError> {
        WeatherClient::new(&config.server_url, Duration::from_secs(config.timeout_secs))
    }

    fn url(&self, city: &str) -> String {
        format!("{}{}/{}", self.base_url, BASE_PATH, city)
    }

    /// Fetches the record for `city`, `None` if the server has never seen it.
    pub async fn get_weather(&self, city: &str) -> Result<Option<Weather>, ClientError> {
        let res = self.http.get(self.url(city)).send().await?;
        match res.status() {
            StatusCode::NOT_FOUND => {
                debug!("No weather for {} yet", city);
                Ok(None)
            }
            StatusCode::OK => Ok(Some(res.json().await?)),
            status => Err(ClientError::UnexpectedStatus {
                operation: "get",
                city: city.to_string(),
                status,
            }),
        }
    }

    /// Replaces the record for `city` and returns what the server stored.
    pub async fn update_weather(
        &self,
        city: &str,
        update: &WeatherUpdate,
    ) -> Result<Weather, ClientError> {
        let res = self.http.put(self.url(city)).json(update).send().await?;
        if res.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                operation: "update",
                city: city.to_string(),
                status: res.status(),
            });
        }
        Ok(res.json().await?)
    }
}

/// An update with a temperature drawn uniformly from `range`.
pub fn random_update(range: Range<f64>) -> WeatherUpdate {
    WeatherUpdate::new(rand::thread_rng().gen_range(range))
}
