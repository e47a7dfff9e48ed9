//! 产品处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

use super::{
    model::{Product, ProductRequest},
    service::ProductService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let Json(request) = payload?;
    let product = state.product_service.save(request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.get_products().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let Path(id) = id?;
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let product = state.product_service.update_product(id, request).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, CoreError> {
    let Path(id) = id?;
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// 健康检查
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    let storage = state.product_service.health().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "storage": storage,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
