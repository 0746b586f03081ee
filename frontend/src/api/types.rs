use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile of the signed-in user as reported by the identity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Human readable message, if the server sent a non-blank one.
    pub fn message(&self) -> Option<&str> {
        let trimmed = self.error.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn api_error_constructors_set_codes() {
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("network error").code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_display_matches_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
    }

    #[test]
    fn blank_message_is_treated_as_absent() {
        assert_eq!(ApiError::unknown("  ").message(), None);
        assert_eq!(ApiError::unknown(" offline ").message(), Some("offline"));
    }
}
