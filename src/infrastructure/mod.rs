//! 基础设施层：日志与存储

#[cfg(feature = "database")]
pub mod database;
pub mod logger;
#[cfg(feature = "database")]
pub mod pg_product_repository;

use std::sync::Arc;
use tracing::info;

use crate::app::product::repository::{
    MemoryProductRepository, ProductRepository, RepositoryError,
};
use crate::config::DatabaseConfig;

/// 根据配置选择存储：配置了数据库连接串时使用 PostgreSQL，否则使用内存存储
pub async fn connect_repository(
    config: &DatabaseConfig,
) -> Result<Arc<dyn ProductRepository>, RepositoryError> {
    match config.url() {
        #[cfg(feature = "database")]
        Some(url) => {
            let pool = database::DatabaseManager::new(url, config)
                .await?
                .into_pool();
            database::create_tables(&pool).await?;
            Ok(Arc::new(pg_product_repository::PgProductRepository::new(pool)))
        }
        #[cfg(not(feature = "database"))]
        Some(_) => {
            tracing::warn!("Database URL configured but the `database` feature is disabled, using in-memory storage");
            Ok(Arc::new(MemoryProductRepository::new()))
        }
        None => {
            info!("No database URL configured, using in-memory storage");
            Ok(Arc::new(MemoryProductRepository::new()))
        }
    }
}
