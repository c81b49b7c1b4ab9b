use anyhow::{bail, Context};
use log::info;
use weather_service::client::{random_update, ClientConfig, WeatherClient, DEFAULT_TEMPERATURES};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .try_init()?;

    let config = ClientConfig::load()?;
    let client = WeatherClient::from_config(&config)?;
    let city = config.city.as_str();

    info!("Getting weather for {}", city);
    let weather = client
        .get_weather(city)
        .await
        .context("reading weather")?;
    info!("Weather for {}: {:?}", city, weather);

    let update = random_update(DEFAULT_TEMPERATURES);
    info!("Updating weather for {} with {:?}", city, update);
    let updated = client
        .update_weather(city, &update)
        .await
        .context("updating weather")?;
    info!("Weather updated: {:?}", updated);

    info!("Getting updated weather for {}", city);
    match client.get_weather(city).await.context("reading weather")? {
        Some(weather) => info!("Weather for {}: {:?}", city, weather),
        None => bail!("weather for {} missing after update", city),
    }

    info!("Done");
    Ok(())
}
