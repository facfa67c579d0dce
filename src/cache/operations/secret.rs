use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys::secret_keys::user_secret_key;
use crate::cache::{SecretStore, SecretStoreError};

/// 基于 Redis 的会话密钥存储
pub struct RedisSecretStore {
    redis: Arc<RedisClient>,
}

impl RedisSecretStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        RedisSecretStore { redis }
    }
}

#[async_trait]
impl SecretStore for RedisSecretStore {
    async fn store(&self, uid: &str, secret: &str, ttl: Duration) -> Result<(), SecretStoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let key = user_secret_key(uid);
        let _: () = conn.set_ex(key, secret, ttl.as_secs().max(1)).await?;

        Ok(())
    }

    async fn take(&self, uid: &str) -> Result<Option<String>, SecretStoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        // GETDEL 保证取出即删除，重放同一 token 时密钥已不存在
        let key = user_secret_key(uid);
        let secret: Option<String> = conn.get_del(key).await?;

        Ok(secret)
    }
}
