use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StoreSecretRequest {
    pub uid: String,
    pub secret: String,
}

/// 成功时响应体就是 `{}`
#[derive(Debug, Serialize)]
pub struct StoreSecretResponse {}
