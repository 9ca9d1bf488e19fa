use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::board::BoardError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Failures surfaced by the service binary and its command handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Board(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Board(BoardError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Board(_) => StatusCode::CONFLICT,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ValidationErrors;

    #[test]
    fn board_errors_map_to_client_statuses() {
        let missing = AppError::from(BoardError::NotFound {
            entity: "job",
            id: "job_999".to_string(),
        });
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let invalid = AppError::from(BoardError::Validation(ValidationErrors::single(
            "title",
            "Job title is required",
        )));
        assert_eq!(
            invalid.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn io_errors_are_server_faults() {
        let err = AppError::from(std::io::Error::other("bind"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
