//! 预订数据模型

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub guest_count: i32,
    /// 每次保存时写入当前时间
    pub reservation_time: DateTime<Utc>,
    pub comments: String,
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} guests at {}",
            self.first_name,
            self.last_name,
            self.guest_count,
            self.reservation_time.format("%d-%m-%Y %I:%M %p")
        )
    }
}

/// 用户可写的字段。reservation_time 不在其中
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewReservation {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,
    pub guest_count: i32,
    #[validate(length(min = 1, max = 1000))]
    pub comments: String,
}
