use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, middleware, routes};

// 网关相关的路由
pub fn gateway_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tweets-for-following",
            get(routes::tweets::handler::get_tweets_for_following),
        )
        .route("/following", get(routes::tweets::handler::get_following))
        .route(
            "/session-secret",
            post(routes::session::handler::store_session_secret),
        )
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(&state.config.api_base_uri.clone(), gateway_routes())
        .layer(axum::middleware::from_fn(middleware::log_errors))
        .with_state(state)
}
