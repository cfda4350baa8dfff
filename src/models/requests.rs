use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/dentists`.
///
/// `lat` and `lng` are required numbers; they are modeled as `Option` so
/// that absence or a non-numeric value surfaces as an `INVALID_COORDS`
/// error from the relay rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub lng: Option<f64>,
    #[serde(default, alias = "radius_km", rename = "radiusKm")]
    pub radius_km: Option<f64>,
    #[serde(default, alias = "open_now", rename = "openNow")]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Coordinates must be JSON numbers. A string or other non-numeric value
/// maps to `None`, same as absence, so both fail with `INVALID_COORDS`
/// instead of a generic deserialization error.
fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

impl SearchRequest {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            radius_km: None,
            open_now: None,
            lang: None,
        }
    }
}

/// Query string of `GET /test`. Every field is optional; the handler
/// fills in the demo defaults (Amsterdam, 10 km, not open-now filtered).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSearchQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub km: Option<f64>,
    #[serde(default, alias = "open_now", rename = "openNow")]
    pub open_now: Option<bool>,
    pub lang: Option<String>,
}

impl From<TestSearchQuery> for SearchRequest {
    fn from(q: TestSearchQuery) -> Self {
        SearchRequest {
            lat: Some(q.lat.unwrap_or(52.3676)),
            lng: Some(q.lng.unwrap_or(4.9041)),
            radius_km: Some(q.km.unwrap_or(10.0)),
            open_now: Some(q.open_now.unwrap_or(false)),
            lang: Some(q.lang.unwrap_or_else(|| "en".to_string())),
        }
    }
}
