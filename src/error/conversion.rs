/**
 * Error to HTTP Response Conversion
 *
 * The single place where domain errors become HTTP responses. Handlers
 * return `Result<_, ApiError>` and axum calls into this conversion for the
 * failure arm.
 *
 * # Response Format
 *
 * ```json
 * { "error": "message", "status": 404 }
 * ```
 *
 * Validation failures additionally carry a `details` array of
 * `{ "field": ..., "message": ... }` objects.
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response.
    ///
    /// `Unexpected` errors log their internal message here; every other
    /// variant has already logged at its raise site if it wanted to.
    fn into_response(self) -> Response {
        if let ApiError::Unexpected { message } = &self {
            tracing::error!("internal error: {}", message);
        }

        let status = self.status_code();
        let message = self.message();

        let mut body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });
        if let ApiError::Validation { errors } = &self {
            body["details"] = serde_json::json!(errors);
        }

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(
                |_| format!(r#"{{"error":"{}","status":{}}}"#, message, status.as_u16()),
            )))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
