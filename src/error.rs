use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    Unauthorized,
    InvalidRequest,
    InternalServerError,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 对外只暴露这几句固定文案，具体失败原因只进日志
        let (status, error) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized access".to_string()),
            AppError::InvalidRequest => (StatusCode::BAD_REQUEST, "Invalid request".to_string()),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "There was an error in connecting to the Twitter API".to_string(),
            ),
        };

        let body = Json(ErrorResponse { error });

        (status, body).into_response()
    }
}
