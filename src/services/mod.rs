// Service exports
pub mod places;

pub use places::{PlacesClient, PlacesError, DEFAULT_ENDPOINT, FIELD_MASK};
