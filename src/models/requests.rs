//! Request DTOs for the mapping service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the create operation (POST /shorten)
///
/// The field is optional at the serde level so that an absent field and an
/// empty body both deserialize and fail validation with the same message,
/// rather than failing as a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    /// The URL to shorten
    #[serde(rename = "OriginalURL", default)]
    pub original_url: Option<String>,
}

impl CreateRequest {
    /// Extracts the submitted URL when present and non-empty.
    ///
    /// Presence is the only validation performed; the URL itself is opaque
    /// to the service.
    pub fn into_original_url(self) -> Option<String> {
        self.original_url.filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"OriginalURL": "https://example.com"}"#;
        let req: CreateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.original_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_create_request_missing_field() {
        let json = r#"{}"#;
        let req: CreateRequest = serde_json::from_str(json).unwrap();
        assert!(req.original_url.is_none());
    }

    #[test]
    fn test_into_original_url_accepts_present_value() {
        let req = CreateRequest {
            original_url: Some("https://example.com".to_string()),
        };
        assert_eq!(
            req.into_original_url().as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_into_original_url_rejects_empty_value() {
        let req = CreateRequest {
            original_url: Some("".to_string()),
        };
        assert!(req.into_original_url().is_none());
    }

    #[test]
    fn test_into_original_url_rejects_missing_value() {
        let req = CreateRequest { original_url: None };
        assert!(req.into_original_url().is_none());
    }
}
