use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

/// AES-GCM 的 nonce 长度（字节）
const NONCE_LEN: usize = 12;

#[derive(Debug, PartialEq, Eq)]
pub enum EncryptError {
    /// 密钥为空字符串
    EmptySecret,
    /// 加密操作本身失败
    Cipher,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DecryptError {
    /// token 不是合法的 base64url
    Encoding,
    /// 密文太短，连 nonce 都不完整
    Truncated,
    /// 认证失败：密钥不匹配或密文被篡改
    Unauthenticated,
}

impl std::fmt::Display for EncryptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncryptError::EmptySecret => write!(f, "secret must not be empty"),
            EncryptError::Cipher => write!(f, "encryption failed"),
        }
    }
}

impl std::fmt::Display for DecryptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecryptError::Encoding => write!(f, "token is not valid base64url"),
            DecryptError::Truncated => write!(f, "token is too short"),
            DecryptError::Unauthenticated => write!(f, "token failed authentication"),
        }
    }
}

impl std::error::Error for EncryptError {}
impl std::error::Error for DecryptError {}

/// 从任意长度的会话密钥派生 256 位加密密钥
fn derive_key(secret: &str) -> [u8; 32] {
    let digest = Sha256::digest(secret.as_bytes());
    digest.into()
}

/// 用会话密钥加密任意字节，输出可放进 URL 查询参数的不透明字符串
///
/// 布局：base64url( nonce(12) || ciphertext+tag )，每次调用使用新的随机 nonce。
pub fn encrypt(plaintext: &[u8], secret: &str) -> Result<String, EncryptError> {
    if secret.is_empty() {
        return Err(EncryptError::EmptySecret);
    }

    let cipher = Aes256Gcm::new_from_slice(&derive_key(secret)).map_err(|_| EncryptError::Cipher)?;
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| EncryptError::Cipher)?;

    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(nonce.as_slice());
    blob.extend_from_slice(&ciphertext);

    Ok(URL_SAFE_NO_PAD.encode(blob))
}

/// `encrypt` 的逆操作；任何失败都说明 token 不可信，调用方不应区分对外暴露
pub fn decrypt(token: &str, secret: &str) -> Result<Vec<u8>, DecryptError> {
    let blob = URL_SAFE_NO_PAD
        .decode(token.as_bytes())
        .map_err(|_| DecryptError::Encoding)?;

    if blob.len() < NONCE_LEN {
        return Err(DecryptError::Truncated);
    }

    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new_from_slice(&derive_key(secret))
        .map_err(|_| DecryptError::Unauthenticated)?;

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| DecryptError::Unauthenticated)
}
