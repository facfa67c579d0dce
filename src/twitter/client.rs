use async_trait::async_trait;

use crate::config::Config;
use crate::twitter::oauth::OAuth1;
use crate::twitter::types::{
    FollowedAccount, FollowingEnvelope, MeEnvelope, Tweet, TweetsEnvelope,
};

const API_BASE: &str = "https://api.twitter.com";

/// 单次推文查询的上限，与原有客户端保持一致
const MAX_TWEETS: u32 = 100;

/// 从能力令牌中取出的委托凭证，仅在一次请求内存活
#[derive(Debug, Clone)]
pub struct DelegatedCredentials {
    pub access_token: String,
    pub access_secret: String,
}

#[derive(Debug)]
pub enum TwitterError {
    /// 网络层失败（连接、超时等）
    Transport(String),
    /// 上游返回了非 2xx 状态
    Status(u16),
    /// 响应体无法解析
    Decode(String),
}

impl std::fmt::Display for TwitterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TwitterError::Transport(e) => write!(f, "twitter transport error: {}", e),
            TwitterError::Status(code) => write!(f, "twitter returned status {}", code),
            TwitterError::Decode(e) => write!(f, "twitter response decode error: {}", e),
        }
    }
}

impl std::error::Error for TwitterError {}

/// 上游社交 API 的读取口径；handler 只依赖这个 trait，便于用脚本化实现测试
#[async_trait]
pub trait TweetSource: Send + Sync {
    /// 某账号最近的原创推文（排除转推和回复），最多 100 条
    async fn recent_tweets(
        &self,
        credentials: &DelegatedCredentials,
        user_id: &str,
    ) -> Result<Vec<Tweet>, TwitterError>;

    /// 当前授权用户关注的账号列表
    async fn following(
        &self,
        credentials: &DelegatedCredentials,
    ) -> Result<Vec<FollowedAccount>, TwitterError>;
}

/// 基于 reqwest 的 Twitter v2 客户端
///
/// 应用级凭证来自配置；委托凭证逐请求传入，两者合成 OAuth 1.0a 签名。
/// 配置里凭证为空时不报错，签名照常生成，由上游以 401 拒绝，
/// 调用方按单账号失败降级处理。
pub struct TwitterApi {
    http: reqwest::Client,
    api_key: String,
    api_secret: String,
}

impl TwitterApi {
    pub fn new(config: &Config) -> Self {
        TwitterApi {
            http: reqwest::Client::new(),
            api_key: config.twitter_api_key.clone(),
            api_secret: config.twitter_api_secret.clone(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        credentials: &DelegatedCredentials,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TwitterError> {
        let url = format!("{}{}", API_BASE, path);
        let auth = OAuth1 {
            consumer_key: &self.api_key,
            consumer_secret: &self.api_secret,
            token: &credentials.access_token,
            token_secret: &credentials.access_secret,
        };

        let response = self
            .http
            .get(&url)
            .query(query)
            .header("Authorization", auth.authorization_header("GET", &url, query))
            .send()
            .await
            .map_err(|e| TwitterError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TwitterError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TwitterError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TweetSource for TwitterApi {
    async fn recent_tweets(
        &self,
        credentials: &DelegatedCredentials,
        user_id: &str,
    ) -> Result<Vec<Tweet>, TwitterError> {
        let max_results = MAX_TWEETS.to_string();
        let query = [
            ("max_results", max_results.as_str()),
            ("exclude", "retweets,replies"),
        ];

        let envelope: TweetsEnvelope = self
            .get_json(credentials, &format!("/2/users/{}/tweets", user_id), &query)
            .await?;

        Ok(envelope.data.unwrap_or_default())
    }

    async fn following(
        &self,
        credentials: &DelegatedCredentials,
    ) -> Result<Vec<FollowedAccount>, TwitterError> {
        // 委托凭证只标识用户，不带用户 ID，先解析出自己是谁
        let me: MeEnvelope = self.get_json(credentials, "/2/users/me", &[]).await?;

        let envelope: FollowingEnvelope = self
            .get_json(
                credentials,
                &format!("/2/users/{}/following", me.data.id),
                &[("max_results", "1000")],
            )
            .await?;

        Ok(envelope.data.unwrap_or_default())
    }
}
