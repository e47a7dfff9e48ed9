//! 产品目录：模型、持久化网关、服务与处理器

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

use axum::{routing::get, Router};

use handler::AppState;

/// `/products` 路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .patch(handler::update_product)
                .delete(handler::delete_product),
        )
}
