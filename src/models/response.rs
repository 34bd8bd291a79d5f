//! Uniform response shapes returned by every table endpoint

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

/// Status used when no transport status is available
pub const DEFAULT_FAILURE_STATUS: u16 = 404;

/// Outcome of a single table operation.
///
/// The HTTP status of the reply is always 200; the catalog's status lives in
/// the `status` field of the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "ResponseEnvelope")]
pub enum ApiResponse {
    /// The catalog answered with status 200
    Success { status: u16, data: Option<Value> },
    /// The catalog answered without raising, but not with 200.
    /// `message` is the full response payload.
    Error { status: u16, message: Value },
    /// The catalog raised, or something local went wrong
    Exception { status: u16, message: Value },
}

impl ApiResponse {
    pub fn ok() -> Self {
        ApiResponse::Success {
            status: 200,
            data: None,
        }
    }

    pub fn ok_with(data: Value) -> Self {
        ApiResponse::Success {
            status: 200,
            data: Some(data),
        }
    }

    pub fn rejected(status: u16, payload: Value) -> Self {
        ApiResponse::Error {
            status,
            message: payload,
        }
    }

    pub fn exception(status: u16, message: Value) -> Self {
        ApiResponse::Exception { status, message }
    }

    /// Generic fallback for unrecognized remote errors and local faults
    pub fn unhandled() -> Self {
        ApiResponse::Exception {
            status: DEFAULT_FAILURE_STATUS,
            message: json!({"message": "Unhandled Exception"}),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Wire form of [`ApiResponse`]
#[derive(Debug, Serialize, ToSchema)]
pub struct ResponseEnvelope {
    pub success: bool,
    #[schema(example = 200)]
    pub status: u16,
    /// Present on success for list, get and search
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
    /// Present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub message: Option<Value>,
}

impl From<ApiResponse> for ResponseEnvelope {
    fn from(response: ApiResponse) -> Self {
        match response {
            ApiResponse::Success { status, data } => ResponseEnvelope {
                success: true,
                status,
                data,
                message: None,
            },
            ApiResponse::Error { status, message } | ApiResponse::Exception { status, message } => {
                ResponseEnvelope {
                    success: false,
                    status,
                    data: None,
                    message: Some(message),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_without_data_omits_field() {
        let value = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert_eq!(value, json!({"success": true, "status": 200}));
    }

    #[test]
    fn test_success_with_list() {
        let value = serde_json::to_value(ApiResponse::ok_with(json!([{"Name": "orders"}]))).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "status": 200, "data": [{"Name": "orders"}]})
        );
    }

    #[test]
    fn test_error_carries_payload_as_message() {
        let payload = json!({"ResponseMetadata": {"HTTPStatusCode": 503}});
        let value = serde_json::to_value(ApiResponse::rejected(503, payload.clone())).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "status": 503, "message": payload})
        );
    }

    #[test]
    fn test_unhandled_defaults() {
        assert_eq!(
            serde_json::to_value(ApiResponse::unhandled()).unwrap(),
            json!({"success": false, "status": 404, "message": {"message": "Unhandled Exception"}})
        );
    }

    #[test]
    fn test_outer_status_is_always_ok() {
        let response = ApiResponse::exception(400, json!({"Code": "EntityNotFoundException"}))
            .into_response();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
