use std::env;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub redis_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
    pub twitter_api_key: String,
    pub twitter_api_secret: String,
    pub secret_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        // 会话密钥的存活时间，单位分钟
        let secret_ttl = env::var("SECRET_TTL")
            .unwrap_or_default()
            .trim_end_matches('m')
            .parse::<u64>()
            .unwrap_or(10);

        Ok(Config {
            redis_url: env::var("REDIS_URL")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "::".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_default()
                .parse()
                .unwrap_or(3000),
            api_base_uri: env::var("API_BASE_URI").unwrap_or_else(|_| "/api".to_string()),
            // 上游应用凭证缺失时不报错，所有上游调用会以签名失败告终，
            // 由聚合逻辑降级为空结果
            twitter_api_key: env::var("TWITTER_API_KEY").unwrap_or_default(),
            twitter_api_secret: env::var("TWITTER_API_SECRET").unwrap_or_default(),
            secret_ttl_secs: secret_ttl * 60,
        })
    }

    pub fn secret_ttl(&self) -> Duration {
        Duration::from_secs(self.secret_ttl_secs)
    }
}
