//! Response DTOs for the mapping service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the create operation (POST /shorten)
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    /// The generated short token
    #[serde(rename = "ShortURL")]
    pub short_url: String,
}

impl CreateResponse {
    /// Creates a new CreateResponse
    pub fn new(short_url: impl Into<String>) -> Self {
        Self {
            short_url: short_url.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
///
/// The `error` field is only present on internal errors, where it carries
/// the raw error detail alongside the generic message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Message describing what went wrong
    pub message: String,
    /// Raw error detail, internal errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Creates an ErrorResponse carrying only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Creates an ErrorResponse carrying a message plus error detail
    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_serialize() {
        let resp = CreateResponse::new("a1b2c3");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"ShortURL":"a1b2c3"}"#);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_omits_absent_detail() {
        let resp = ErrorResponse::new("Short URL not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"message":"Short URL not found"}"#);
    }

    #[test]
    fn test_error_response_includes_detail() {
        let resp = ErrorResponse::with_detail("Internal server error", "store unavailable");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Internal server error"));
        assert!(json.contains("store unavailable"));
    }
}
