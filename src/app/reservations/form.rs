//! 预订表单
//!
//! 把不可信的提交数据绑定到 `NewReservation`，逐字段校验，
//! 校验通过后才允许保存。可绑定的字段是显式列出的，
//! 表中新增列不会自动变成用户可写。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use super::model::{NewReservation, Reservation};
use super::service::ReservationService;
use crate::core::error::{AppResult, FormError};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const WHOLE_NUMBER_MESSAGE: &str = "Enter a whole number.";
pub const MAX_VALUE_MESSAGE: &str = "Ensure this value is less than or equal to 2147483647.";
pub const MIN_VALUE_MESSAGE: &str = "Ensure this value is greater than or equal to -2147483648.";

/// 表单字段描述
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub max_length: Option<usize>,
}

pub const RESERVATION_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "first_name",
        label: "First name",
        input_type: "text",
        max_length: Some(255),
    },
    FieldSpec {
        name: "last_name",
        label: "Last name",
        input_type: "text",
        max_length: Some(255),
    },
    FieldSpec {
        name: "guest_count",
        label: "Guest count",
        input_type: "number",
        max_length: None,
    },
    FieldSpec {
        name: "comments",
        label: "Comments",
        input_type: "text",
        max_length: Some(1000),
    },
];

/// 原始提交数据，未知字段（例如 reservation_time）会被忽略
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReservationInput {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub guest_count: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl ReservationInput {
    /// 从键值对构造；同名键保留最后一个值，未知键忽略
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut input = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "first_name" => input.first_name = Some(value),
                "last_name" => input.last_name = Some(value),
                "guest_count" => input.guest_count = Some(value),
                "comments" => input.comments = Some(value),
                _ => {}
            }
        }
        input
    }

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "first_name" => self.first_name.as_deref(),
            "last_name" => self.last_name.as_deref(),
            "guest_count" => self.guest_count.as_deref(),
            "comments" => self.comments.as_deref(),
            _ => None,
        }
    }

    fn cleaned_text(&self, field: &str) -> String {
        self.value(field).unwrap_or_default().trim().to_string()
    }
}

pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
    data: Option<ReservationInput>,
    errors: FieldErrors,
    cleaned: Option<NewReservation>,
}

/// 模板渲染用的字段
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub max_length: Option<usize>,
    pub value: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub bound: bool,
    pub fields: Vec<FieldView>,
}

impl ReservationForm {
    /// 未绑定的空表单
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(input: ReservationInput) -> Self {
        Self {
            data: Some(input),
            ..Self::default()
        }
    }

    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    /// 未绑定的表单永远无效，且不产生错误
    pub fn is_valid(&mut self) -> bool {
        let Some(input) = &self.data else {
            return false;
        };

        let (errors, cleaned) = clean(input);
        self.errors = errors;
        self.cleaned = cleaned;
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn cleaned_data(&self) -> Option<&NewReservation> {
        self.cleaned.as_ref()
    }

    /// 只能在 `is_valid()` 返回 true 之后调用
    pub async fn save(&self, service: &ReservationService) -> AppResult<Reservation> {
        match &self.cleaned {
            Some(new) if self.errors.is_empty() => service.create(new).await,
            _ => Err(FormError::NotValid.into()),
        }
    }

    pub fn view(&self) -> FormView {
        let fields = RESERVATION_FIELDS
            .iter()
            .map(|spec| FieldView {
                name: spec.name,
                label: spec.label,
                input_type: spec.input_type,
                max_length: spec.max_length,
                value: self
                    .data
                    .as_ref()
                    .and_then(|input| input.value(spec.name))
                    .unwrap_or_default()
                    .to_string(),
                errors: self.errors.get(spec.name).cloned().unwrap_or_default(),
            })
            .collect();

        FormView {
            bound: self.is_bound(),
            fields,
        }
    }
}

fn clean(input: &ReservationInput) -> (FieldErrors, Option<NewReservation>) {
    let mut errors = FieldErrors::new();

    let raw_count = input.cleaned_text("guest_count");
    let guest_count = if raw_count.is_empty() {
        add_error(&mut errors, "guest_count", REQUIRED_MESSAGE.to_string());
        None
    } else {
        match parse_guest_count(&raw_count) {
            Ok(count) => Some(count),
            Err(message) => {
                add_error(&mut errors, "guest_count", message.to_string());
                None
            }
        }
    };

    let candidate = NewReservation {
        first_name: input.cleaned_text("first_name"),
        last_name: input.cleaned_text("last_name"),
        guest_count: guest_count.unwrap_or_default(),
        comments: input.cleaned_text("comments"),
    };

    if let Err(validation) = candidate.validate() {
        for (field, _) in validation.field_errors() {
            let field = field.to_string();
            let value = input.cleaned_text(&field);
            let message = if value.is_empty() {
                REQUIRED_MESSAGE.to_string()
            } else {
                let max = RESERVATION_FIELDS
                    .iter()
                    .find(|spec| spec.name == field)
                    .and_then(|spec| spec.max_length)
                    .unwrap_or_default();
                format!(
                    "Ensure this value has at most {} characters (it has {}).",
                    max,
                    value.chars().count()
                )
            };
            add_error(&mut errors, &field, message);
        }
    }

    if errors.is_empty() {
        (errors, Some(candidate))
    } else {
        (errors, None)
    }
}

/// 接受 "2"、"+2"、"2.0"；超出 i32 的整数给出范围提示
fn parse_guest_count(raw: &str) -> Result<i32, &'static str> {
    let digits = match raw.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
        _ => raw,
    };

    let unsigned = digits.strip_prefix(['+', '-']).unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit()) {
        return Err(WHOLE_NUMBER_MESSAGE);
    }

    digits.parse::<i32>().map_err(|_| {
        if digits.starts_with('-') {
            MIN_VALUE_MESSAGE
        } else {
            MAX_VALUE_MESSAGE
        }
    })
}

fn add_error(errors: &mut FieldErrors, field: &str, message: String) {
    errors.entry(field.to_string()).or_default().push(message);
}
