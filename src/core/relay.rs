use crate::models::domain::{self, TextSearchQuery};
use crate::models::SearchRequest;
use crate::services::{PlacesClient, PlacesError};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the relay pipeline, one variant per caller-visible
/// outcome.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Latitude/longitude missing or outside the valid coordinate range.
    /// No provider call is made.
    #[error("lat and lng are required numbers")]
    InvalidCoordinates,

    /// The provider rejected or failed the call. Status and raw body are
    /// passed through unchanged for caller debuggability.
    #[error("provider returned status {status}")]
    Upstream { status: u16, body: String },

    /// Anything unanticipated (network failure, client errors). The cause
    /// is logged server-side; callers only see a generic signal.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<PlacesError> for RelayError {
    fn from(err: PlacesError) -> Self {
        match err {
            PlacesError::Upstream { status, body } => RelayError::Upstream { status, body },
            PlacesError::Request(e) => RelayError::Internal(e.to_string()),
        }
    }
}

/// The relay pipeline: validate a search request, translate it to the
/// provider's query schema, invoke the provider once, and hand the
/// normalized result list back.
///
/// Stateless apart from the shared provider client; each call is an
/// independent linear pipeline with exactly one outbound request.
#[derive(Clone)]
pub struct SearchRelay {
    places: Arc<PlacesClient>,
}

impl SearchRelay {
    pub fn new(places: Arc<PlacesClient>) -> Self {
        Self { places }
    }

    /// Run one search end to end.
    ///
    /// Result items are opaque provider values, returned verbatim; the
    /// relay never transforms, filters, or sorts them.
    pub async fn handle_search(&self, req: &SearchRequest) -> Result<Vec<Value>, RelayError> {
        let (lat, lng) = match (req.lat, req.lng) {
            (Some(lat), Some(lng)) if coordinates_valid(lat, lng) => (lat, lng),
            _ => return Err(RelayError::InvalidCoordinates),
        };

        let query = self.build_query(req, lat, lng);

        let places = self.places.search_text(&query).await?;

        Ok(places)
    }

    /// Translate a validated request into the provider schema, applying
    /// the documented defaults and the radius clamp.
    fn build_query(&self, req: &SearchRequest, lat: f64, lng: f64) -> TextSearchQuery {
        TextSearchQuery::dental_clinics(
            lat,
            lng,
            req.radius_km,
            req.open_now.unwrap_or(true),
            req.lang.as_deref().unwrap_or(domain::DEFAULT_LANGUAGE),
        )
    }
}

/// Coordinates must be finite and inside the geographic domain. Query
/// parameters can yield NaN/inf through `f64` parsing, so finiteness is
/// checked explicitly.
fn coordinates_valid(lat: f64, lng: f64) -> bool {
    lat.is_finite() && lng.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}
