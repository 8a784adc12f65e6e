//! 页面模板

use serde::Serialize;
use std::sync::Arc;
use tera::{Context, Tera};

use super::reservations::form::FormView;
use crate::core::error::AppResult;

pub const HOME_TEMPLATE: &str = "index.html";

/// 首页渲染上下文
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub form: FormView,
}

/// 启动时编译好的模板，按 Arc 在请求间共享
#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(HOME_TEMPLATE, include_str!("../../templates/index.html"))?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render_home(&self, page: &HomePage) -> AppResult<String> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(HOME_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reservations::form::{ReservationForm, ReservationInput};

    #[test]
    fn test_render_empty_form() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render_home(&HomePage {
                form: ReservationForm::new().view(),
            })
            .unwrap();

        assert!(html.contains(r#"name="first_name""#));
        assert!(html.contains(r#"name="guest_count""#));
        assert!(html.contains(r#"maxlength="1000""#));
        assert!(!html.contains("errorlist"));
    }

    #[test]
    fn test_render_escapes_submitted_values() {
        let templates = Templates::new().unwrap();
        let mut form = ReservationForm::bind(ReservationInput {
            first_name: Some("<script>".to_string()),
            ..ReservationInput::default()
        });
        assert!(!form.is_valid());

        let html = templates
            .render_home(&HomePage { form: form.view() })
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("This field is required."));
    }
}
