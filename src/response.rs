// JSON envelope shared by every endpoint
// Success: { success: true, data?, message? }
// Failure: { success: false, error: { code, message, details? } }

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Successful response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Envelope carrying a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Envelope carrying a payload and a human-readable message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of a listing plus the size of the full result
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

impl<T: Serialize> Paginated<T> {
    /// Slice `items` to the requested 1-based page
    pub fn from_items(items: Vec<T>, page: Option<usize>, limit: Option<usize>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        let total = items.len();
        let items = items
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .collect();

        Self {
            items,
            page,
            limit,
            total,
        }
    }
}

/// Error detail nested under `error` in a failure envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g. "VALIDATION_ERROR", "NOT_FOUND")
    pub code: String,

    /// Human-readable message, safe to show to end users
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Failure envelope
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.error.details = Some(details);
        self
    }

    /// Pair the envelope with a status code and render it
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_omits_empty_fields() {
        let body = serde_json::to_value(ApiResponse::ok(json!([1, 2]))).unwrap();
        assert_eq!(body, json!({ "success": true, "data": [1, 2] }));

        let body = serde_json::to_value(ApiResponse::message("done")).unwrap();
        assert_eq!(body, json!({ "success": true, "message": "done" }));
    }

    #[test]
    fn test_pagination_slices_pages() {
        let page = Paginated::from_items((1..=45).collect::<Vec<i32>>(), Some(3), None);
        assert_eq!(page.items, (41..=45).collect::<Vec<i32>>());
        assert_eq!(page.total, 45);
        assert_eq!(page.limit, DEFAULT_PAGE_SIZE);

        let past_end = Paginated::from_items(vec![1, 2, 3], Some(5), Some(2));
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 3);
    }

    #[test]
    fn test_error_envelope_shape() {
        let envelope = ErrorEnvelope::new("NOT_FOUND", "Loan not found");
        let body = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": { "code": "NOT_FOUND", "message": "Loan not found" }
            })
        );

        let body = serde_json::to_value(
            ErrorEnvelope::new("NOT_IMPLEMENTED", "Feature coming soon")
                .with_details(json!({ "feature": "schemes.search" })),
        )
        .unwrap();
        assert_eq!(body["error"]["details"]["feature"], "schemes.search");
    }
}
