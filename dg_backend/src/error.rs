use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde_json;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

pub type ResultAPIStream = std::result::Result<Response, crate::error::Error>;
pub type ResultAPI = std::result::Result<Json<Value>, crate::error::Error>;
pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] dg_core::error::Error),

    #[error(transparent)]
    Engine(#[from] dg_engine::error::Error),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Rejection(#[from] JsonRejection),

    #[error("Failed to build streaming response: {0}")]
    FailedBuildSseResponse(String),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Error::Core(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Error::Engine(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidRequest(_) => axum::http::StatusCode::BAD_REQUEST,
            Error::Rejection(_) => axum::http::StatusCode::BAD_REQUEST,
            Error::FailedBuildSseResponse(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Error::IOError(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!("request failed: {self}");
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
