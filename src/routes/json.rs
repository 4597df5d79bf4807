use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const MESSAGE: &str = "Hello, this is a sample JSON response!";

/// Body served on `/json`. `status` is part of the document only; the HTTP
/// status line stays at the default 200 and is not derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponsePayload {
    pub message: &'static str,
    pub status:  u16,
}

impl Default for ResponsePayload {
    fn default() -> Self {
        Self {
            message: MESSAGE,
            status:  200,
        }
    }
}

impl ResponsePayload {
    /// Compact JSON followed by a single `\n`, the framing stream encoders
    /// put after each document.
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Method, headers, query and body are never extracted, so every request
/// routed here gets the same document.
pub async fn handler() -> Response {
    match ResponsePayload::default().encode() {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        // Unreachable for a struct of a &str and an integer.
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode response payload");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
