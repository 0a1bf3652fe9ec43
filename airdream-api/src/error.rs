use airdream_booking::WorkflowError;
use airdream_core::CoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
            AppError::Anyhow(err) => classify(err),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

fn classify(err: anyhow::Error) -> (StatusCode, String) {
    if let Some(core) = err.downcast_ref::<CoreError>() {
        match core {
            CoreError::NotFound(_) => return (StatusCode::NOT_FOUND, core.to_string()),
            CoreError::Workflow(_) => return (StatusCode::BAD_REQUEST, core.to_string()),
            CoreError::Persistence { .. } | CoreError::Store(_) => {}
        }
    }
    if let Some(workflow) = err.downcast_ref::<WorkflowError>() {
        return (StatusCode::BAD_REQUEST, workflow.to_string());
    }

    tracing::error!("Internal Server Error: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
