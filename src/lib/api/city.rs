use rocket::http::uri::{fmt::Path, Segments};
use rocket::request::FromSegments;

/// City name taken from the trailing path segment.
///
/// Matches zero segments as well, so `/api/v1/weather/` reaches the handler
/// with an empty name instead of falling through to the 404 catcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City(String);

/// The path carried more than one segment after the prefix.
#[derive(Debug)]
pub struct NestedPath(pub usize);

impl City {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'r> FromSegments<'r> for City {
    type Error = NestedPath;

    fn from_segments(segments: Segments<'r, Path>) -> Result<City, NestedPath> {
        match segments.len() {
            0 => Ok(City(String::new())),
            1 => Ok(City(segments.get(0).unwrap_or_default().to_string())),
            n => Err(NestedPath(n)),
        }
    }
}
