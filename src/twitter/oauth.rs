//! OAuth 1.0a 用户上下文签名（HMAC-SHA1）
//!
//! 上游的用户时间线接口只接受应用凭证 + 委托凭证的双重签名，
//! 这里实现 RFC 5849 的参数规范化、签名基串和 Authorization 头构造。

use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// 一次请求所需的全部 OAuth 1.0a 凭证
pub struct OAuth1<'a> {
    pub consumer_key: &'a str,
    pub consumer_secret: &'a str,
    pub token: &'a str,
    pub token_secret: &'a str,
}

/// RFC 3986 百分号编码，只保留 unreserved 字符
fn percent_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

fn nonce() -> String {
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| {
            let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
            chars[rng.gen_range(0..chars.len())] as char
        })
        .collect()
}

fn timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// 参数规范化 + 签名基串，见 RFC 5849 §3.4.1
fn signature_base_string(method: &str, base_url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(base_url),
        percent_encode(&param_string)
    )
}

impl OAuth1<'_> {
    /// 为一次 GET/POST 请求生成 `Authorization: OAuth ...` 头的值
    ///
    /// `query` 必须与实际发出的查询参数完全一致，否则签名校验会失败。
    pub fn authorization_header(
        &self,
        method: &str,
        base_url: &str,
        query: &[(&str, &str)],
    ) -> String {
        self.authorization_header_at(method, base_url, query, &nonce(), timestamp())
    }

    fn authorization_header_at(
        &self,
        method: &str,
        base_url: &str,
        query: &[(&str, &str)],
        nonce: &str,
        timestamp: u64,
    ) -> String {
        let timestamp = timestamp.to_string();
        let oauth_params: [(&str, &str); 6] = [
            ("oauth_consumer_key", self.consumer_key),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", &timestamp),
            ("oauth_token", self.token),
            ("oauth_version", "1.0"),
        ];

        let mut all_params: Vec<(String, String)> = query
            .iter()
            .chain(oauth_params.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        all_params.sort();

        let base = signature_base_string(method, base_url, &all_params);
        let signing_key = format!(
            "{}&{}",
            percent_encode(self.consumer_secret),
            percent_encode(self.token_secret)
        );

        // HMAC 密钥长度任意，new_from_slice 不会失败
        let mut mac =
            HmacSha1::new_from_slice(signing_key.as_bytes()).expect("hmac accepts any key length");
        mac.update(base.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        let mut header_params: Vec<(String, String)> = oauth_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        header_params.push(("oauth_signature".to_string(), signature));
        header_params.sort();

        let fields = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("OAuth {}", fields)
    }
}
