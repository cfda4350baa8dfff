use crate::models::TextSearchQuery;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Field mask restricting which place fields the provider includes in the
/// response payload. Fixed for every call.
pub const FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.location,\
                              places.currentOpeningHours.openNow,places.googleMapsUri,places.rating";

/// Default text-search endpoint of the Google Places API.
pub const DEFAULT_ENDPOINT: &str = "https://places.googleapis.com/v1/places:searchText";

/// Errors that can occur when calling the places provider
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {status}")]
    Upstream { status: u16, body: String },
}

/// Places provider API client
///
/// Handles the single outbound call the relay makes: a text search
/// against the provider, authenticated with a static API key and scoped
/// by a fixed field mask. Holds no mutable state; safe to share across
/// handlers behind an `Arc`.
pub struct PlacesClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl PlacesClient {
    /// Create a new client. `endpoint` is configurable so tests can point
    /// at a local mock server; production uses [`DEFAULT_ENDPOINT`].
    pub fn new(endpoint: String, api_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            client,
        }
    }

    /// Execute a text search and return the raw place items.
    ///
    /// On a non-success status the provider's status code and raw body are
    /// surfaced unchanged as [`PlacesError::Upstream`]. On success the body
    /// is parsed leniently: an unparseable body or a missing `places` key
    /// both normalize to an empty vec rather than an error.
    pub async fn search_text(&self, query: &TextSearchQuery) -> Result<Vec<Value>, PlacesError> {
        tracing::debug!(
            "Searching places at {} (radius: {}m)",
            self.endpoint,
            query.location_restriction.circle.radius
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Provider call failed: {} - {}", status, body);
            return Err(PlacesError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;

        // A malformed body is treated as "no results", not an error.
        let json: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        let places = json
            .get("places")
            .and_then(|p| p.as_array())
            .cloned()
            .unwrap_or_default();

        tracing::debug!("Provider returned {} places", places.len());

        Ok(places)
    }
}
