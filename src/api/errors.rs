use crate::constants::INTERNAL_ERROR_MESSAGE;
use crate::errors::RelayError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tracing::error;

/// Failure class reported in the `type` field of an error envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The upstream provider reported the failure
    OpenaiError,
    /// Anything else
    ServerError,
}

/// Error envelope returned for every failed `/chat` call
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: bool,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
}

/// Helper function to create error envelopes
pub fn error_envelope(kind: ErrorKind, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: true,
        kind,
        message: message.to_string(),
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            RelayError::Upstream(message) => (
                StatusCode::BAD_GATEWAY,
                error_envelope(ErrorKind::OpenaiError, &message),
            ),
            RelayError::Internal(detail) => {
                error!("Internal error while handling request: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_envelope(ErrorKind::ServerError, INTERNAL_ERROR_MESSAGE),
                )
            }
        };
        (status, axum::Json(body)).into_response()
    }
}

/// Renders a handler panic as the generic server error envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    RelayError::Internal(format!("handler panicked: {}", detail)).into_response()
}
