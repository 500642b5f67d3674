use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub const MISSING_API_KEY_MESSAGE: &str = "Chave API do Gemini não configurada";
pub const INVALID_TAB_MESSAGE: &str = "Tipo de tab inválido";
pub const INVALID_BODY_MESSAGE: &str = "Corpo da requisição inválido";
pub const INVALID_IMAGE_MESSAGE: &str = "Imagem inválida";
pub const GENERIC_FAILURE_MESSAGE: &str = "Erro ao gerar prompt";

/// Errors surfaced to HTTP clients as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{}", INVALID_TAB_MESSAGE)]
    InvalidTab,

    #[error("{0}")]
    NotFound(String),

    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey,

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn upstream(err: anyhow::Error) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            ApiError::Upstream(GENERIC_FAILURE_MESSAGE.to_string())
        } else {
            ApiError::Upstream(message)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidTab => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingApiKey | ApiError::Upstream(_) | ApiError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
