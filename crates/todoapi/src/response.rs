//! Shared response encoding.
//!
//! Every response carries the same two headers and a JSON body. Store numbers
//! are turned into plain JSON numbers here, before they reach a handler.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const ALLOW_ANY_ORIGIN: &str = "*";

const INTERNAL_ERROR_BODY: &str = r#"{"error":"Internal server error"}"#;

/// A JSON-encoded response with the fixed API headers.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    status: StatusCode,
    body: String,
}

impl JsonResponse {
    /// Encode `body` as JSON with the given status.
    ///
    /// A body that fails to encode becomes a generic 500.
    pub fn new<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode response body");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: INTERNAL_ERROR_BODY.to_string(),
                }
            }
        }
    }

    /// 200 OK.
    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 201 Created.
    pub fn created<T: Serialize>(body: &T) -> Self {
        Self::new(StatusCode::CREATED, body)
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Decode the body back into a JSON value.
    #[cfg(test)]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [
                (header::CONTENT_TYPE, CONTENT_TYPE_JSON),
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ANY_ORIGIN),
            ],
            self.body,
        )
            .into_response()
    }
}

/// Convert a store number (arbitrary-precision decimal text) into a JSON number.
///
/// The value is rendered as an `f64`. Returns `None` if the text is not a
/// number or does not fit in a finite `f64`.
#[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
pub fn store_number_to_json(raw: &str) -> Option<serde_json::Value> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
}
