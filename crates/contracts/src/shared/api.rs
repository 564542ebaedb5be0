//! Shapes of the REST boundary and the error model built on top of it.

use serde::{Deserialize, Serialize};

/// Message shown when the backend rejects a record because its name is taken
pub const DUPLICATE_NAME_MESSAGE: &str = "Name already exists, please use a different name";

/// Every GET endpoint wraps its payload in `{ "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiStatus {
    fn code_number(&self) -> Option<i64> {
        match self.code.as_ref()? {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Error payloads come in two flavours: `{ status: { code, message } }`
/// or a bare `{ message }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    Status { status: ApiStatus },
    Plain { message: String },
}

impl ApiErrorBody {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Status { status } => status.message.as_deref(),
            Self::Plain { message } => Some(message.as_str()),
        }
        .map(str::trim)
        .filter(|m| !m.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-OK response, keeping the backend message
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::NotAuthenticated;
        }
        let message = ApiErrorBody::parse(body).and_then(|b| b.message().map(str::to_string));
        Self::Http { status, message }
    }

    /// Some endpoints answer 200 with `{ status: { code: 4xx, message } }`.
    /// Returns the error such a body describes, if any.
    pub fn from_success_body(body: &str) -> Option<Self> {
        match ApiErrorBody::parse(body)? {
            ApiErrorBody::Status { status } => {
                let code = status.code_number()?;
                if (200..300).contains(&code) {
                    return None;
                }
                Some(Self::Http {
                    status: u16::try_from(code).unwrap_or(500),
                    message: status.message.filter(|m| !m.trim().is_empty()),
                })
            }
            ApiErrorBody::Plain { .. } => None,
        }
    }

    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Text shown next to a form when an operation fails.
///
/// `action` completes the generic fallback, e.g. `"save country"` gives
/// `"Failed to save country"`.
pub fn describe_failure(action: &str, error: &ApiError) -> String {
    if let Some(message) = error.backend_message() {
        if message.to_lowercase().contains("already exists") {
            return DUPLICATE_NAME_MESSAGE.to_string();
        }
        return message.to_string();
    }
    match error {
        ApiError::NotAuthenticated => "Session expired, please log in again".to_string(),
        _ => format!("Failed to {}", action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope() {
        let env: ApiEnvelope<Vec<i32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(env.data, vec![1, 2]);
    }

    #[test]
    fn test_error_body_shapes() {
        let status = ApiErrorBody::parse(r#"{"status":{"code":409,"message":"Bank already exists"}}"#)
            .unwrap();
        assert_eq!(status.message(), Some("Bank already exists"));

        let plain = ApiErrorBody::parse(r#"{"message":"Invalid currency"}"#).unwrap();
        assert_eq!(plain.message(), Some("Invalid currency"));

        assert!(ApiErrorBody::parse("<html>oops</html>").is_none());
    }

    #[test]
    fn test_duplicate_name_rewrite() {
        let err = ApiError::from_response(400, r#"{"message":"Country ALREADY EXISTS"}"#);
        assert_eq!(describe_failure("save country", &err), DUPLICATE_NAME_MESSAGE);
    }

    #[test]
    fn test_backend_message_passthrough() {
        let err = ApiError::from_response(422, r#"{"status":{"code":422,"message":"Qty must be positive"}}"#);
        assert_eq!(describe_failure("save detail", &err), "Qty must be positive");
    }

    #[test]
    fn test_generic_fallback() {
        let err = ApiError::from_response(500, "");
        assert_eq!(describe_failure("save bank", &err), "Failed to save bank");

        let err = ApiError::Network("offline".into());
        assert_eq!(describe_failure("load cities", &err), "Failed to load cities");
    }

    #[test]
    fn test_unauthorized() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::NotAuthenticated);
    }

    #[test]
    fn test_from_success_body() {
        let err = ApiError::from_success_body(r#"{"status":{"code":"400","message":"Store already exists"}}"#)
            .unwrap();
        assert_eq!(err.backend_message(), Some("Store already exists"));

        assert!(ApiError::from_success_body(r#"{"status":{"code":200,"message":"ok"}}"#).is_none());
        assert!(ApiError::from_success_body(r#"{"id":5,"name":"Jakarta"}"#).is_none());
    }
}
