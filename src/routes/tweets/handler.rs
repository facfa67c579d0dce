use axum::{
    extract::{Query, State},
    response::Json,
};
use futures_util::future::join_all;

use crate::{
    AppState,
    error::AppError,
    token::{CapabilityError, CapabilityPayload},
    twitter::{DelegatedCredentials, FollowedAccount},
};

use super::model::{FollowingTweets, TokenQuery};

/// 取出会话密钥并兑付能力令牌，两个网关接口的公共前半段
///
/// 密钥取即删：无论后面成功失败，这个 uid 下次都要先重新存入密钥。
async fn redeem_capability(
    state: &AppState,
    query: &TokenQuery,
) -> Result<CapabilityPayload, AppError> {
    let (Some(token), Some(uid)) = (query.token.as_deref(), query.uid.as_deref()) else {
        return Err(AppError::Unauthorized);
    };

    let secret = state.secrets.take(uid).await.map_err(|e| {
        tracing::error!("Failed to fetch session secret for uid {}: {}", uid, e);
        AppError::InternalServerError
    })?;

    // 密钥不存在或已被清空时无法解密，与其它意外失败一样归为 500
    let Some(secret) = secret.filter(|s| !s.is_empty()) else {
        tracing::warn!("No session secret stored for uid {}", uid);
        return Err(AppError::InternalServerError);
    };

    let now_ms = chrono::Utc::now().timestamp_millis();
    CapabilityPayload::redeem(token, &secret, now_ms).map_err(|e| match e {
        CapabilityError::Expired => AppError::Unauthorized,
        CapabilityError::Undecryptable | CapabilityError::Malformed => {
            tracing::error!("Capability token rejected for uid {}: {}", uid, e);
            AppError::InternalServerError
        }
    })
}

/// 按能力令牌里的账号列表并发拉取各家最近的推文
///
/// 所有上游调用一起发出，等全部落定；单个账号失败降级成空列表，
/// 不影响整体 200，条目顺序始终等于输入顺序。
#[axum::debug_handler]
pub async fn get_tweets_for_following(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<FollowingTweets>>, AppError> {
    let payload = redeem_capability(&state, &query).await?;

    let credentials = DelegatedCredentials {
        access_token: payload.access_token.clone(),
        access_secret: payload.access_secret.clone(),
    };
    let following_ids = payload.following_ids();

    let fetches = following_ids.into_iter().map(|id| {
        let tweets = &state.tweets;
        let credentials = &credentials;
        async move {
            match tweets.recent_tweets(credentials, &id).await {
                Ok(tweets) => FollowingTweets {
                    following: id,
                    tweets,
                },
                Err(e) => {
                    tracing::warn!("Upstream call failed for account {}: {}", id, e);
                    FollowingTweets {
                        following: id,
                        tweets: Vec::new(),
                    }
                }
            }
        }
    });

    let entries = join_all(fetches).await;

    Ok(Json(entries))
}

/// 当前授权用户的关注列表；单次上游调用，没有可降级的粒度
#[axum::debug_handler]
pub async fn get_following(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<FollowedAccount>>, AppError> {
    let payload = redeem_capability(&state, &query).await?;

    let credentials = DelegatedCredentials {
        access_token: payload.access_token,
        access_secret: payload.access_secret,
    };

    let accounts = state.tweets.following(&credentials).await.map_err(|e| {
        tracing::error!("Failed to fetch following list: {}", e);
        AppError::InternalServerError
    })?;

    Ok(Json(accounts))
}
