//! Error response DTOs.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
///
/// Validation failures and conflicts carry a `reasons` map from field name
/// to message; other errors carry only the top-level message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    /// Creates a new error response with only a message.
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
            reasons: None,
        }
    }

    /// Creates an error response carrying a full field→message map.
    pub fn with_reasons(message: &str, reasons: BTreeMap<String, String>) -> Self {
        Self {
            error: message.to_string(),
            reasons: Some(reasons),
        }
    }

    /// Creates an error response with a single-field reasons map.
    pub fn single_reason(message: &str, field: &str, reason: &str) -> Self {
        let mut reasons = BTreeMap::new();
        reasons.insert(field.to_string(), reason.to_string());
        Self::with_reasons(message, reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "boom" }));
    }

    #[test]
    fn test_single_reason_shape() {
        let json =
            serde_json::to_value(ErrorResponse::single_reason("Conflict", "email", "taken"))
                .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Conflict",
                "reasons": { "email": "taken" }
            })
        );
    }
}
