//! Error types for the web layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lattice_core::DataError;
use thiserror::Error;

/// Result type alias for web-layer operations.
pub type Result<T> = std::result::Result<T, WebError>;

/// Errors that can occur while orchestrating views or serving requests.
#[derive(Debug, Error)]
pub enum WebError {
    /// Domain data loading or context access failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Two views were registered under the same type name.
    #[error("view type `{0}` is already registered")]
    DuplicateView(&'static str),

    /// IO errors (socket binding, config file reads).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::Data(DataError::Unauthorized) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(error = %self, status = %status, "request failed");
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_401() {
        let response = WebError::Data(DataError::Unauthorized).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn dependency_bugs_map_to_500() {
        let response = WebError::Data(DataError::NotLoaded { context: "todos" }).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
