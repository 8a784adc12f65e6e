//! 菜单业务服务
//!
//! 菜单只能通过这里直接读写，没有对外的 HTTP 接口。

use rust_decimal::Decimal;
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;
use validator::Validate;

use super::model::{MenuItem, NewMenuItem};
use crate::config::MenuSeed;
use crate::core::error::{AppError, AppResult};

#[derive(Clone)]
pub struct MenuService {
    db: SqlitePool,
}

impl MenuService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create(&self, item: NewMenuItem) -> AppResult<MenuItem> {
        item.validate()
            .map_err(|e| AppError::Model(format!("菜品数据无效: {}", e)))?;

        let price = item.price_text();
        let id = sqlx::query("INSERT INTO menu_item (name, price) VALUES (?, ?)")
            .bind(&item.name)
            .bind(&price)
            .execute(&self.db)
            .await?
            .last_insert_rowid();

        self.get(id).await
    }

    pub async fn get(&self, id: i64) -> AppResult<MenuItem> {
        sqlx::query_as::<_, MenuItem>("SELECT id, name, price FROM menu_item WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("menu_item {}", id)))
    }

    pub async fn list(&self) -> AppResult<Vec<MenuItem>> {
        let items =
            sqlx::query_as::<_, MenuItem>("SELECT id, name, price FROM menu_item ORDER BY id")
                .fetch_all(&self.db)
                .await?;
        Ok(items)
    }

    pub async fn update(&self, id: i64, item: NewMenuItem) -> AppResult<MenuItem> {
        item.validate()
            .map_err(|e| AppError::Model(format!("菜品数据无效: {}", e)))?;

        let result = sqlx::query("UPDATE menu_item SET name = ?, price = ? WHERE id = ?")
            .bind(&item.name)
            .bind(item.price_text())
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("menu_item {}", id)));
        }

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM menu_item WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("menu_item {}", id)));
        }

        info!("Deleted menu item: {}", id);
        Ok(())
    }

    /// 菜单表为空时写入配置中的菜品，返回写入数量
    pub async fn seed(&self, seeds: &[MenuSeed]) -> AppResult<usize> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM menu_item")
            .fetch_one(&self.db)
            .await?;

        if count.0 > 0 {
            info!("Menu already contains data, skipping seed");
            return Ok(0);
        }

        let mut tx = self.db.begin().await?;
        for seed in seeds {
            let price = Decimal::from_str(seed.price.trim())
                .map_err(|e| AppError::Model(format!("菜品 {} 的价格无效: {}", seed.name, e)))?;
            let item = NewMenuItem::new(seed.name.trim(), price);
            item.validate()
                .map_err(|e| AppError::Model(format!("菜品 {} 数据无效: {}", seed.name, e)))?;

            sqlx::query("INSERT INTO menu_item (name, price) VALUES (?, ?)")
                .bind(&item.name)
                .bind(item.price_text())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        info!("Seeded {} menu items", seeds.len());
        Ok(seeds.len())
    }
}
