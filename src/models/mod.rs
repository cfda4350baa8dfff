// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{clamp_radius_meters, Circle, LatLng, LocationRestriction, TextSearchQuery};
pub use requests::{SearchRequest, TestSearchQuery};
pub use responses::{ErrorResponse, HealthResponse};
