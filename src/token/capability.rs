use serde::{Deserialize, Serialize};

use super::codec::{self, DecryptError, EncryptError};

/// 能力令牌的明文载荷
///
/// 字段名与浏览器端加密前的 JSON 保持一致：`accessToken` / `accessSecret`
/// 是上游 API 的委托凭证，`following` 是逗号拼接的账号 ID 列表（查询
/// 关注列表的变体不带此字段），`eat` 是毫秒级的绝对过期时间。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityPayload {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "accessSecret")]
    pub access_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eat: Option<i64>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CapabilityError {
    /// 解密失败：密钥不匹配或 token 被破坏
    Undecryptable,
    /// 解密成功但载荷不是合法 JSON
    Malformed,
    /// `eat` 缺失或不在未来
    Expired,
}

impl std::fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapabilityError::Undecryptable => write!(f, "capability token is undecryptable"),
            CapabilityError::Malformed => write!(f, "capability payload is malformed"),
            CapabilityError::Expired => write!(f, "capability token is expired"),
        }
    }
}

impl std::error::Error for CapabilityError {}

impl From<DecryptError> for CapabilityError {
    fn from(_: DecryptError) -> Self {
        CapabilityError::Undecryptable
    }
}

impl CapabilityPayload {
    /// 签发：序列化并加密成不透明 token（浏览器端和测试用）
    pub fn issue(&self, secret: &str) -> Result<String, EncryptError> {
        let json = serde_json::to_vec(self).map_err(|_| EncryptError::Cipher)?;
        codec::encrypt(&json, secret)
    }

    /// 兑付：解密、解析并校验 `eat > now`；每个 token 只应被兑付一次，
    /// 单次性由密钥存储的取即删语义保证，而不是由密码学方案本身保证
    pub fn redeem(token: &str, secret: &str, now_ms: i64) -> Result<Self, CapabilityError> {
        let plaintext = codec::decrypt(token, secret)?;
        let payload: CapabilityPayload =
            serde_json::from_slice(&plaintext).map_err(|_| CapabilityError::Malformed)?;

        if !payload.is_live(now_ms) {
            return Err(CapabilityError::Expired);
        }

        Ok(payload)
    }

    /// `eat` 存在且严格在 `now_ms` 之后才算存活
    pub fn is_live(&self, now_ms: i64) -> bool {
        self.eat.is_some_and(|eat| eat > now_ms)
    }

    /// 按输入顺序拆出要查询的账号 ID，空段丢弃
    pub fn following_ids(&self) -> Vec<String> {
        self.following
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(following: Option<&str>, eat: Option<i64>) -> CapabilityPayload {
        CapabilityPayload {
            access_token: "a".to_string(),
            access_secret: "b".to_string(),
            following: following.map(str::to_string),
            eat,
        }
    }

    #[test]
    fn issue_then_redeem_restores_payload() {
        let issued = payload(Some("111,222"), Some(2_000));
        let token = issued.issue("s").unwrap();
        let redeemed = CapabilityPayload::redeem(&token, "s", 1_000).unwrap();
        assert_eq!(redeemed, issued);
    }

    #[test]
    fn redeem_rejects_expired_eat() {
        let token = payload(None, Some(1_000)).issue("s").unwrap();
        assert_eq!(
            CapabilityPayload::redeem(&token, "s", 1_000),
            Err(CapabilityError::Expired)
        );
    }

    #[test]
    fn redeem_rejects_missing_eat() {
        let token = payload(None, None).issue("s").unwrap();
        assert_eq!(
            CapabilityPayload::redeem(&token, "s", 0),
            Err(CapabilityError::Expired)
        );
    }

    #[test]
    fn redeem_rejects_wrong_secret() {
        let token = payload(None, Some(i64::MAX)).issue("right").unwrap();
        assert_eq!(
            CapabilityPayload::redeem(&token, "wrong", 0),
            Err(CapabilityError::Undecryptable)
        );
    }

    #[test]
    fn redeem_rejects_non_json_plaintext() {
        let token = super::super::codec::encrypt(b"not json", "s").unwrap();
        assert_eq!(
            CapabilityPayload::redeem(&token, "s", 0),
            Err(CapabilityError::Malformed)
        );
    }

    #[test]
    fn wire_field_names_match_browser_payload() {
        let json = serde_json::to_value(payload(Some("1"), Some(5))).unwrap();
        assert!(json.get("accessToken").is_some());
        assert!(json.get("accessSecret").is_some());
        assert!(json.get("following").is_some());
        assert!(json.get("eat").is_some());
    }

    #[test]
    fn following_ids_preserves_order_and_drops_empty_segments() {
        assert_eq!(
            payload(Some("111,222,,333"), None).following_ids(),
            vec!["111", "222", "333"]
        );
        assert!(payload(None, None).following_ids().is_empty());
        assert!(payload(Some(""), None).following_ids().is_empty());
    }
}
