//! 菜单数据模型

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{sqlite::SqliteRow, FromRow, Row};
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// 价格最多 10 位数字，其中 2 位小数
pub const PRICE_MAX_DIGITS: u32 = 10;
pub const PRICE_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

// price 以文本存储，读取时解析回 Decimal
impl FromRow<'_, SqliteRow> for MenuItem {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let raw_price: String = row.try_get("price")?;
        let price = Decimal::from_str(&raw_price).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price,
        })
    }
}

/// 新建或修改菜品时的输入
#[derive(Debug, Clone, Validate)]
pub struct NewMenuItem {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

impl NewMenuItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// 存储用的规范文本，固定两位小数
    pub fn price_text(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// 负数价格不在这里拦截
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    let normalized = price.normalize();

    if normalized.scale() > PRICE_DECIMAL_PLACES {
        return Err(ValidationError::new("decimal_places"));
    }

    let whole = normalized.trunc().abs();
    let whole_digits = if whole.is_zero() {
        0
    } else {
        whole.to_string().len() as u32
    };
    if whole_digits > PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES {
        return Err(ValidationError::new("max_digits"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_price_precision() {
        assert!(NewMenuItem::new("Greek Salad", price("12.50")).validate().is_ok());
        assert!(NewMenuItem::new("Lemon Dessert", price("99999999.99")).validate().is_ok());
        assert!(NewMenuItem::new("Bruschetta", price("7.125")).validate().is_err());
        assert!(NewMenuItem::new("Gold Leaf", price("123456789.00")).validate().is_err());
    }

    #[test]
    fn test_trailing_zeros_are_not_extra_places() {
        assert!(NewMenuItem::new("Water", price("1.5000")).validate().is_ok());
    }

    #[test]
    fn test_negative_price_is_accepted() {
        assert!(NewMenuItem::new("Discount", price("-3.00")).validate().is_ok());
    }

    #[test]
    fn test_name_length() {
        assert!(NewMenuItem::new("", price("1.00")).validate().is_err());
        assert!(NewMenuItem::new("x".repeat(101), price("1.00")).validate().is_err());
        assert!(NewMenuItem::new("x".repeat(100), price("1.00")).validate().is_ok());
    }

    #[test]
    fn test_price_text() {
        assert_eq!(NewMenuItem::new("Tea", price("3.5")).price_text(), "3.50");
        assert_eq!(NewMenuItem::new("Tea", price("3")).price_text(), "3.00");
    }
}
