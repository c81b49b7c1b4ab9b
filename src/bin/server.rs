use log::info;
use weather_service::{api, store::WeatherStore};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .try_init()?;

    let rocket = api::build(WeatherStore::new()).ignite().await?;
    let config = rocket.config();
    info!(
        "HTTP server listening on {}:{}{}",
        config.address,
        config.port,
        api::BASE_PATH
    );

    rocket.launch().await?;
    info!("Server stopped");
    Ok(())
}
