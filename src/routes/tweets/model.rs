use serde::{Deserialize, Serialize};

use crate::twitter::Tweet;

/// 两个网关接口共用的查询参数；缺失按未授权处理而不是 400，
/// 所以这里都是 Option，由 handler 自己校验
#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
    pub uid: Option<String>,
}

/// 聚合结果的一个条目，顺序与请求里的账号顺序一致
#[derive(Debug, Serialize)]
pub struct FollowingTweets {
    pub following: String,
    pub tweets: Vec<Tweet>,
}
