//! 预订业务服务

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use super::model::{NewReservation, Reservation};
use crate::core::error::{AppError, AppResult};

#[derive(Clone)]
pub struct ReservationService {
    db: SqlitePool,
}

impl ReservationService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// 插入一行，reservation_time 取当前时间
    pub async fn create(&self, new: &NewReservation) -> AppResult<Reservation> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservation (first_name, last_name, guest_count, reservation_time, comments)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, first_name, last_name, guest_count, reservation_time, comments
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(new.guest_count)
        .bind(Utc::now())
        .bind(&new.comments)
        .fetch_one(&self.db)
        .await?;

        info!("Created reservation {}: {}", reservation.id, reservation);
        Ok(reservation)
    }

    /// 修改同样会重写 reservation_time
    pub async fn update(&self, id: i64, new: &NewReservation) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservation
            SET first_name = ?, last_name = ?, guest_count = ?, reservation_time = ?, comments = ?
            WHERE id = ?
            RETURNING id, first_name, last_name, guest_count, reservation_time, comments
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(new.guest_count)
        .bind(Utc::now())
        .bind(&new.comments)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))
    }

    pub async fn get(&self, id: i64) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservation WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))
    }

    pub async fn list(&self) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>("SELECT * FROM reservation ORDER BY id")
            .fetch_all(&self.db)
            .await?;
        Ok(reservations)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reservation")
            .fetch_one(&self.db)
            .await?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::infrastructure::DatabaseManager;

    async fn service() -> ReservationService {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        let manager = DatabaseManager::connect_and_migrate(&config).await.unwrap();
        ReservationService::new(manager.into_pool())
    }

    fn ada() -> NewReservation {
        NewReservation {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            guest_count: 2,
            comments: "Window seat".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_stamps_current_time() {
        let reservations = service().await;

        let before = Utc::now();
        let created = reservations.create(&ada()).await.unwrap();
        let after = Utc::now();

        assert!(created.reservation_time >= before && created.reservation_time <= after);
        assert_eq!(reservations.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_restamps_time() {
        let reservations = service().await;
        let created = reservations.create(&ada()).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let mut changed = ada();
        changed.guest_count = 4;
        let updated = reservations.update(created.id, &changed).await.unwrap();

        assert_eq!(updated.guest_count, 4);
        assert!(updated.reservation_time > created.reservation_time);
    }

    #[tokio::test]
    async fn test_duplicate_rows_are_allowed() {
        let reservations = service().await;
        reservations.create(&ada()).await.unwrap();
        reservations.create(&ada()).await.unwrap();

        assert_eq!(reservations.count().await.unwrap(), 2);
        let all = reservations.list().await.unwrap();
        assert_ne!(all[0].id, all[1].id);
    }

    #[tokio::test]
    async fn test_missing_rows() {
        let reservations = service().await;
        assert!(matches!(reservations.get(42).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            reservations.update(42, &ada()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
