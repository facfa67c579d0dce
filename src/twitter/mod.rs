// 上游社交 API 模块
// client 定义读取口径和 reqwest 实现，oauth 负责请求签名

pub mod client;
pub mod oauth;
pub mod types;

pub use client::{DelegatedCredentials, TweetSource, TwitterApi, TwitterError};
pub use types::{FollowedAccount, Tweet};
