use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CleanlyfeError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("cannot connect to MongoDB: {source}")]
    Connection {
        #[from]
        source: mongodb::error::Error,
    },

    #[error("database not initialized; run bootstrap first")]
    NotInitialized,
}

impl IntoResponse for CleanlyfeError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            CleanlyfeError::Connection { .. } => {
                let status = StatusCode::SERVICE_UNAVAILABLE;
                let body = ApiErrorBody {
                    code: "DATABASE_UNAVAILABLE".to_string(),
                    message: "The database is unreachable.".to_string(),
                };
                (status, body)
            }
            CleanlyfeError::NotInitialized => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "NOT_INITIALIZED".to_string(),
                    message: "The database client is not initialized.".to_string(),
                };
                (status, body)
            }
            CleanlyfeError::Configuration(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
