//! Clinic Relay - HTTP relay for nearby dental clinic search
//!
//! This library wraps a single third-party places-search call: it validates
//! a coordinate-and-radius request, translates it into the provider's text
//! search schema, and normalizes the response back to the caller.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{RelayError, SearchRelay};
pub use models::{clamp_radius_meters, SearchRequest, TextSearchQuery};
pub use services::{PlacesClient, PlacesError};
