//! # 餐厅预订站点
//!
//! 分层结构：
//! - `app`：路由与业务模块（问候、预订表单、菜单）
//! - `core`：错误处理与中间件
//! - `infrastructure`：数据库与日志
//! - `config`：TOML 配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{create_routes, AppState};
pub use config::Config;
pub use crate::core::error::{AppError, AppResult};
