//! PostgreSQL 产品仓储

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use crate::app::product::{
    model::{NewProduct, Product},
    repository::{ProductRepository, RepositoryError},
};

const COLUMNS: &str = "id, name, maker, price, image_url";

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn store(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, maker, price, image_url) VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.maker)
        .bind(product.price)
        .bind(&product.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products =
            sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let product =
            sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Option<Product>, RepositoryError> {
        let updated = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET name = $1, maker = $2, price = $3, image_url = $4 WHERE id = $5 RETURNING {COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.maker)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "postgres"
    }
}
