use std::sync::Arc;

use cache::SecretStore;
use config::Config;
use twitter::TweetSource;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod token;
pub mod twitter;

/// 全部 handler 共享的应用状态；两个依赖都是 trait 对象，
/// 生产上接 Redis 和真实 Twitter 客户端，测试里换内存实现
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub secrets: Arc<dyn SecretStore>,
    pub tweets: Arc<dyn TweetSource>,
}
