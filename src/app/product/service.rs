//! 产品业务服务

use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use super::model::{Product, ProductRequest};
use super::repository::ProductRepository;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

fn not_found(id: i64) -> CoreError {
    CoreError::NotFound(format!("Product {} not found", id))
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn save(&self, request: ProductRequest) -> Result<Product, CoreError> {
        request.validate()?;

        let product = self.repository.store(request.into()).await?;
        info!("Created product: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub async fn get_products(&self) -> Result<Vec<Product>, CoreError> {
        let products = self.repository.find_all().await?;
        debug!("Loaded {} products", products.len());
        Ok(products)
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, CoreError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), CoreError> {
        if !self.repository.delete_by_id(id).await? {
            return Err(not_found(id));
        }

        info!("Deleted product: {}", id);
        Ok(())
    }

    /// 用请求内容覆盖名称、厂商、价格和图片地址，id 保持不变
    pub async fn update_product(
        &self,
        id: i64,
        request: ProductRequest,
    ) -> Result<Product, CoreError> {
        request.validate()?;

        let mut product = self.get_product(id).await?;
        product.apply(request);

        let product = self
            .repository
            .update(product)
            .await?
            .ok_or_else(|| not_found(id))?;
        info!("Updated product: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 检查存储连通性，返回存储类型
    pub async fn health(&self) -> Result<&'static str, CoreError> {
        self.repository.ping().await?;
        Ok(self.repository.kind())
    }
}
