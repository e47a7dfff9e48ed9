//! 产品数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 已持久化的产品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub maker: String,
    pub price: i64,
    pub image_url: String,
}

/// 尚未分配 id 的产品
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub maker: String,
    pub price: i64,
    pub image_url: String,
}

/// 创建 / 更新产品的请求体，请求中的 `id` 会被忽略
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,

    pub maker: String,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,

    pub image_url: String,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            maker: request.maker,
            price: request.price,
            image_url: request.image_url,
        }
    }
}

impl Product {
    pub fn with_id(id: i64, product: NewProduct) -> Self {
        Self {
            id,
            name: product.name,
            maker: product.maker,
            price: product.price,
            image_url: product.image_url,
        }
    }

    /// 覆盖除 id 以外的全部字段
    pub fn apply(&mut self, request: ProductRequest) {
        self.name = request.name;
        self.maker = request.maker;
        self.price = request.price;
        self.image_url = request.image_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: 1,
            name: "name".to_string(),
            maker: "maker".to_string(),
            price: 5000,
            image_url: "abc.jpg".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({
                "id": 1,
                "name": "name",
                "maker": "maker",
                "price": 5000,
                "imageUrl": "abc.jpg"
            })
        );
    }

    #[test]
    fn test_request_ignores_id() {
        let request: ProductRequest = serde_json::from_value(json!({
            "id": 42,
            "name": "cat tower",
            "maker": "catmaker",
            "price": 30000,
            "imageUrl": "tower.png"
        }))
        .unwrap();

        assert_eq!(request.name, "cat tower");
        assert_eq!(request.image_url, "tower.png");
    }

    #[test]
    fn test_request_validation() {
        let request = ProductRequest {
            name: String::new(),
            maker: "maker".to_string(),
            price: -1,
            image_url: String::new(),
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(!fields.contains_key("name"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_empty_labels_are_valid() {
        let request = ProductRequest {
            name: String::new(),
            maker: String::new(),
            price: 0,
            image_url: String::new(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut product = Product {
            id: 7,
            name: "old".to_string(),
            maker: "old maker".to_string(),
            price: 100,
            image_url: "old.jpg".to_string(),
        };

        product.apply(ProductRequest {
            name: "new".to_string(),
            maker: "new maker".to_string(),
            price: 200,
            image_url: "new.jpg".to_string(),
        });

        assert_eq!(product.id, 7);
        assert_eq!(product.name, "new");
        assert_eq!(product.maker, "new maker");
        assert_eq!(product.price, 200);
        assert_eq!(product.image_url, "new.jpg");
    }
}
