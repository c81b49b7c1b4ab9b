use rocket::figment::{
    providers::{Env, Serialized},
    Figment,
};
use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ClientConfig {
    pub server_url: String,
    pub timeout_secs: u64,
    pub city: String,
}

impl Default for ClientConfig {
    fn default() -> ClientConfig {
        ClientConfig {
            server_url: "http://localhost:8080".to_string(),
            timeout_secs: 5,
            city: "Moscow".to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `WEATHER_SERVER_URL`, `WEATHER_TIMEOUT_SECS`
    /// and `WEATHER_CITY`.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ClientConfig::default()))
            .merge(Env::prefixed("WEATHER_"))
    }

    pub fn load() -> anyhow::Result<ClientConfig> {
        Ok(ClientConfig::figment().extract()?)
    }
}
