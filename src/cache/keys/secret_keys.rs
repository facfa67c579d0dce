/// 会话密钥缓存键前缀
const USER_SECRET_PREFIX: &str = "secret:uid:";

/// 生成会话密钥缓存键
pub fn user_secret_key(uid: &str) -> String {
    format!("{}{}", USER_SECRET_PREFIX, uid)
}
