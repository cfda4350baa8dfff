use serde::{Deserialize, Serialize};

/// Fixed text query sent to the provider. The relay is single-purpose:
/// it only ever searches for dental clinics.
pub const TEXT_QUERY: &str = "dental clinics";

/// Fixed result-type filter applied by the provider.
pub const INCLUDED_TYPE: &str = "dentist";

/// Radius defaults and bounds, in the units the caller uses (km) and the
/// provider expects (meters).
pub const DEFAULT_RADIUS_KM: f64 = 3.0;
pub const MIN_RADIUS_METERS: f64 = 500.0;
pub const MAX_RADIUS_METERS: f64 = 100_000.0;

/// Default language tag when the caller does not supply one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Query body for the provider's text-search endpoint.
///
/// Field names follow the provider's wire schema (camelCase). Built
/// deterministically from a validated search request; never constructed
/// from raw user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSearchQuery {
    pub text_query: String,
    pub included_type: String,
    pub strict_type_filtering: bool,
    pub open_now: bool,
    pub language_code: String,
    pub location_restriction: LocationRestriction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRestriction {
    pub circle: Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: LatLng,
    /// Radius in meters, always within [MIN_RADIUS_METERS, MAX_RADIUS_METERS].
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl TextSearchQuery {
    /// Build the fixed dental-clinic query around a center point.
    ///
    /// `radius_km` is the caller-supplied radius; `None` falls back to
    /// [`DEFAULT_RADIUS_KM`]. The resulting radius in meters saturates at
    /// the provider's accepted bounds.
    pub fn dental_clinics(
        lat: f64,
        lng: f64,
        radius_km: Option<f64>,
        open_now: bool,
        language_code: &str,
    ) -> Self {
        Self {
            text_query: TEXT_QUERY.to_string(),
            included_type: INCLUDED_TYPE.to_string(),
            strict_type_filtering: true,
            open_now,
            language_code: language_code.to_string(),
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: LatLng {
                        latitude: lat,
                        longitude: lng,
                    },
                    radius: clamp_radius_meters(radius_km),
                },
            },
        }
    }
}

/// Convert a radius in kilometers to the meter value sent upstream,
/// clamped to the provider's accepted interval.
pub fn clamp_radius_meters(radius_km: Option<f64>) -> f64 {
    let km = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    (km * 1000.0).clamp(MIN_RADIUS_METERS, MAX_RADIUS_METERS)
}
