//! Response bodies shared by the REST handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgment returned by every command route.
///
/// Always `{"status":"ok"}`, whatever the request body held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AckResponse {
    /// Always `"ok"`.
    pub status: String,
}

impl AckResponse {
    /// The single acknowledgment value.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Current server time (RFC 3339).
    pub timestamp: String,
    /// Crate version.
    pub version: String,
    /// Number of open WebSocket listeners.
    pub listeners: usize,
}
