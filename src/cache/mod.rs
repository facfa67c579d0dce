// 缓存模块
// 会话密钥的短租约存储：浏览器存入，网关取即删，一个密钥最多兑付一次

pub mod keys;
pub mod operations;

use std::time::Duration;

use async_trait::async_trait;

pub use operations::secret::RedisSecretStore;

/// 密钥存储操作失败（连接、命令执行等），不区分具体原因
#[derive(Debug)]
pub struct SecretStoreError(String);

impl SecretStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        SecretStoreError(message.into())
    }
}

impl std::fmt::Display for SecretStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "secret store error: {}", self.0)
    }
}

impl std::error::Error for SecretStoreError {}

impl From<redis::RedisError> for SecretStoreError {
    fn from(e: redis::RedisError) -> Self {
        SecretStoreError(e.to_string())
    }
}

/// 每用户会话密钥的租约存储
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// 存入密钥，带 TTL，被遗弃的密钥到期自动消失
    async fn store(&self, uid: &str, secret: &str, ttl: Duration) -> Result<(), SecretStoreError>;

    /// 原子地取出并删除密钥；并发请求下同一密钥只有一个赢家
    async fn take(&self, uid: &str) -> Result<Option<String>, SecretStoreError>;
}
