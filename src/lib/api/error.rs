use thiserror::Error;

/// Failures a handler reports back to the caller.
#[derive(Debug, Error, Responder)]
pub enum ApiError {
    #[error("{0}")]
    #[response(status = 400, content_type = "plain")]
    BadRequest(String),
    #[error("{0}")]
    #[response(status = 404, content_type = "plain")]
    NotFound(String),
}

impl ApiError {
    pub fn missing_city() -> ApiError {
        ApiError::BadRequest("City parameter is required".to_string())
    }

    pub fn invalid_body() -> ApiError {
        ApiError::BadRequest("Invalid request body".to_string())
    }

    pub fn not_found(city: &str) -> ApiError {
        ApiError::NotFound(format!("Weather for city '{}' not found", city))
    }
}
