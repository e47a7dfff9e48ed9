//! # Toy Store 产品目录服务
//!
//! 基于 Axum 的产品增删改查 REST 服务：
//! - `app`：产品模型、持久化网关、业务服务与处理器
//! - `core`：统一错误处理与请求日志中间件
//! - `infrastructure`：日志初始化与 PostgreSQL 存储
//! - `config`：TOML 配置与环境变量覆盖

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::create_app;
pub use app::product::handler::AppState;
pub use app::product::service::ProductService;
