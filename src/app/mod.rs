//! 应用层

pub mod product;

use axum::{middleware, routing::get, Router};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use product::handler::{self, AppState};

/// 组装完整的应用路由
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .route("/health", get(handler::health_check))
        .merge(product::routes());

    with_layers(routes, request_timeout).with_state(state)
}

/// 超时、请求日志、追踪与跨域中间件，CORS 在最外层
fn with_layers<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}
