use crate::infrastructure::svg_figure::RenderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    NoData(String),
    #[error("Render error {0}")]
    Render(#[from] RenderError),
    #[error("Generic error {0}")]
    AnyhowError(#[from] anyhow::Error),
    #[error("Failed to build response")]
    Response(StatusCode),
}

impl From<StatusCode> for ApiError {
    fn from(status: StatusCode) -> Self {
        ApiError::Response(status)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) | ApiError::NoData(_) => StatusCode::NOT_FOUND,
            ApiError::Response(status) => *status,
            ApiError::Render(_) | ApiError::AnyhowError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}
