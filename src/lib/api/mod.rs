//! HTTP surface of the weather service.
//!
//! `GET /api/v1/weather/<city>` reads a record, `PUT /api/v1/weather/<city>`
//! replaces it. The store is handed to the handlers as managed state.

mod catchers;
mod city;
mod error;
mod logger;
mod routes;

use rocket::{Build, Rocket};

use crate::store::WeatherStore;

pub use city::City;
pub use error::ApiError;

pub const BASE_PATH: &str = "/api/v1/weather";

pub fn build(store: WeatherStore) -> Rocket<Build> {
    rocket::build()
        .manage(store)
        .attach(logger::fairing())
        .mount(BASE_PATH, routes![routes::get_weather, routes::update_weather])
        .register("/", catchers::all())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use rocket::tokio;

    use crate::core::weather::Weather;
    use crate::store::WeatherStore;

    use super::build;

    async fn client() -> Client {
        Client::tracked(build(WeatherStore::new())).await.unwrap()
    }

    async fn put(client: &Client, uri: &str, body: &str) -> (Status, String) {
        let res = client
            .put(uri)
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        (res.status(), res.into_string().await.unwrap_or_default())
    }

    #[tokio::test]
    async fn get_update_get() {
        let client = client().await;

        let res = client.get("/api/v1/weather/Moscow").dispatch().await;
        assert_eq!(res.status(), Status::NotFound);
        assert_eq!(
            res.into_string().await.unwrap(),
            "Weather for city 'Moscow' not found"
        );

        let before = Utc::now();
        let res = client
            .put("/api/v1/weather/Moscow")
            .header(ContentType::JSON)
            .body(r#"{"temperature": 21.5}"#)
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(res.content_type(), Some(ContentType::JSON));
        let stored: Weather = res.into_json().await.unwrap();
        assert_eq!(stored.city, "Moscow");
        assert_eq!(stored.temperature, 21.5);
        assert!(stored.updated_at >= before);
        assert!(stored.updated_at <= Utc::now());

        let res = client.get("/api/v1/weather/Moscow").dispatch().await;
        assert_eq!(res.status(), Status::Ok);
        let fetched: Weather = res.into_json().await.unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn path_city_and_server_clock_win() {
        let client = client().await;
        let body = r#"{"city":"Paris","temperature":3.25,"updated_at":"2000-01-01T00:00:00Z"}"#;
        let (status, _) = put(&client, "/api/v1/weather/Oslo", body).await;
        assert_eq!(status, Status::Ok);

        let store = client.rocket().state::<WeatherStore>().unwrap();
        assert_eq!(store.get("Paris"), None);
        let oslo = store.get("Oslo").unwrap();
        assert_eq!(oslo.city, "Oslo");
        assert_eq!(oslo.temperature, 3.25);
        assert!(oslo.updated_at.timestamp() > 946_684_800);
    }

    #[tokio::test]
    async fn empty_city_is_bad_request() {
        let client = client().await;

        let (status, body) = put(&client, "/api/v1/weather/", r#"{"temperature": 1.0}"#).await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body, "City parameter is required");

        let res = client.get("/api/v1/weather/").dispatch().await;
        assert_eq!(res.status(), Status::BadRequest);

        assert!(client.rocket().state::<WeatherStore>().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let client = client().await;

        for body in ["{not json", r#"{"temperature": "warm"}"#, "[]", ""] {
            let (status, text) = put(&client, "/api/v1/weather/Moscow", body).await;
            assert_eq!(status, Status::BadRequest, "body {:?}", body);
            assert_eq!(text, "Invalid request body");
        }

        let res = client.get("/api/v1/weather/Moscow").dispatch().await;
        assert_eq!(res.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn put_replaces_whole_record() {
        let client = client().await;
        put(&client, "/api/v1/weather/Moscow", r#"{"temperature": 1.0}"#).await;
        put(&client, "/api/v1/weather/Moscow", r#"{"temperature": 2.0}"#).await;

        let res = client.get("/api/v1/weather/Moscow").dispatch().await;
        let w: Weather = res.into_json().await.unwrap();
        assert_eq!(w.temperature, 2.0);
        assert_eq!(client.rocket().state::<WeatherStore>().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let client = client().await;
        let res = client.get("/api/v2/weather/Moscow").dispatch().await;
        assert_eq!(res.status(), Status::NotFound);
        assert_eq!(
            res.into_string().await.unwrap(),
            "No route for '/api/v2/weather/Moscow'"
        );
    }
}
