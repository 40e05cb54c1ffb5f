use std::fmt;

/// Custom error type for Confluent Cloud operations
#[derive(Debug)]
pub enum CcloudError {
    /// HTTP request failed (network, TLS, timeout)
    Http(reqwest::Error),
    /// Login failed - terminal for the whole session
    Auth(String),
    /// API returned a non-2xx, non-404 response
    Api { status: u16, message: String },
    /// JSON parsing error on a successful response
    Json(String),
    /// Pre-flight validation rejected the request before any network call
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    /// A declared change to a field that can only be set at creation
    ImmutableField { field: &'static str },
}

impl fmt::Display for CcloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CcloudError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CcloudError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            CcloudError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CcloudError::Json(msg) => write!(f, "JSON error: {}", msg),
            CcloudError::InvalidConfig { field, reason } => {
                write!(f, "Invalid value for {}: {}", field, reason)
            }
            CcloudError::ImmutableField { field } => {
                write!(
                    f,
                    "Field '{}' is immutable and can only be changed by replacing the resource",
                    field
                )
            }
        }
    }
}

impl std::error::Error for CcloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CcloudError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CcloudError {
    fn from(err: reqwest::Error) -> Self {
        CcloudError::Http(err)
    }
}

impl From<serde_json::Error> for CcloudError {
    fn from(err: serde_json::Error) -> Self {
        CcloudError::Json(err.to_string())
    }
}

/// Result type alias for Confluent Cloud operations
pub type Result<T> = std::result::Result<T, CcloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = CcloudError::Api {
            status: 422,
            message: "422 Unprocessable Entity: quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_auth_error_display() {
        let err = CcloudError::Auth("401 Unauthorized".to_string());
        assert!(err.to_string().contains("Authentication failed"));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = CcloudError::InvalidConfig {
            field: "cloud_region",
            reason: "'moon-base-1' is not a region of provider 'aws'".to_string(),
        };
        assert!(err.to_string().contains("cloud_region"));
        assert!(err.to_string().contains("moon-base-1"));
    }

    #[test]
    fn test_immutable_field_display() {
        let err = CcloudError::ImmutableField {
            field: "cloud_provider",
        };
        assert!(err.to_string().contains("cloud_provider"));
        assert!(err.to_string().contains("immutable"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CcloudError = json_err.into();
        match err {
            CcloudError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected CcloudError::Json"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Verify CcloudError is Send + Sync for async usage
        assert_send_sync::<CcloudError>();
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let err = CcloudError::Api {
            status: 500,
            message: "500 Internal Server Error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
