use axum::{
    extract::{Json, State},
};

use crate::{AppState, error::AppError};

use super::model::{StoreSecretRequest, StoreSecretResponse};

/// 浏览器在调用网关前先把本次会话的解密密钥存进来
///
/// 密钥带 TTL，正常流程里会被网关取即删，遗弃的密钥到期自动消失。
#[axum::debug_handler]
pub async fn store_session_secret(
    State(state): State<AppState>,
    Json(request): Json<StoreSecretRequest>,
) -> Result<Json<StoreSecretResponse>, AppError> {
    if request.uid.is_empty() || request.secret.is_empty() {
        return Err(AppError::InvalidRequest);
    }

    state
        .secrets
        .store(&request.uid, &request.secret, state.config.secret_ttl())
        .await
        .map_err(|e| {
            tracing::error!("Failed to store session secret for uid {}: {}", request.uid, e);
            AppError::InternalServerError
        })?;

    Ok(Json(StoreSecretResponse {}))
}
