//! 数据库基础设施

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        // 内存数据库只存在于单个连接上，连接不能被回收
        let pool = if is_in_memory(&config.url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
                .connect_with(options)
                .await?
        };

        Ok(Self { pool })
    }

    /// 连接并建表，测试与启动共用
    pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<Self, Error> {
        let manager = Self::new(config).await?;
        create_tables(manager.get_pool()).await?;
        Ok(manager)
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// 创建数据库表（幂等）
pub async fn create_tables(pool: &SqlitePool) -> Result<(), Error> {
    info!("Creating database tables...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS menu_item (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL,
            price TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservation (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            guest_count INTEGER NOT NULL,
            reservation_time TEXT NOT NULL,
            comments VARCHAR(1000) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database tables created successfully");
    Ok(())
}
