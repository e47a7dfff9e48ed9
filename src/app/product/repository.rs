//! 产品持久化网关

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::model::{NewProduct, Product};
use crate::core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Database(Box::new(err))
    }
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        CoreError::InternalServerError(err.to_string())
    }
}

/// 产品存储抽象，按生成的 id 进行增删改查
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入新产品并分配 id
    async fn store(&self, product: NewProduct) -> Result<Product, RepositoryError>;

    /// 按 id 升序返回全部产品
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;

    /// 覆盖已有产品的可变字段，id 不存在时返回 `None`
    async fn update(&self, product: Product) -> Result<Option<Product>, RepositoryError>;

    /// 删除成功返回 `true`
    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 检查存储是否可用
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// 存储类型名称，用于健康检查和日志
    fn kind(&self) -> &'static str;
}

#[derive(Debug, Default)]
struct MemoryStore {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

/// 内存存储，id 从 1 开始递增且删除后不复用
#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    inner: RwLock<MemoryStore>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: T) -> RepositoryError {
        RepositoryError::Unavailable("memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn store(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut store = self.inner.write().map_err(Self::poisoned)?;
        store.last_id += 1;
        let product = Product::with_id(store.last_id, product);
        store.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let store = self.inner.read().map_err(Self::poisoned)?;
        Ok(store.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let store = self.inner.read().map_err(Self::poisoned)?;
        Ok(store.products.get(&id).cloned())
    }

    async fn update(&self, product: Product) -> Result<Option<Product>, RepositoryError> {
        let mut store = self.inner.write().map_err(Self::poisoned)?;
        match store.products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product;
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut store = self.inner.write().map_err(Self::poisoned)?;
        Ok(store.products.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.inner.read().map(|_| ()).map_err(Self::poisoned)
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
