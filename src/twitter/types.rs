use serde::{Deserialize, Serialize};

/// 上游返回的推文对象，除 id/text 外的字段原样透传给前端
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// 被关注的账号
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowedAccount {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Twitter v2 响应信封，无结果时 data 缺失
#[derive(Debug, Deserialize)]
pub(crate) struct TweetsEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Tweet>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FollowingEnvelope {
    #[serde(default)]
    pub data: Option<Vec<FollowedAccount>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeEnvelope {
    pub data: FollowedAccount,
}
