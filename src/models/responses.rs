use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Machine-readable error body for the search endpoints.
///
/// The `error` field carries a stable code (`INVALID_COORDS`,
/// `INTERNAL_ERROR`) clients can switch on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn invalid_coords() -> Self {
        Self {
            error: "INVALID_COORDS".to_string(),
        }
    }

    pub fn internal_error() -> Self {
        Self {
            error: "INTERNAL_ERROR".to_string(),
        }
    }
}
