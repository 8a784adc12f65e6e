//! 预订页面处理器

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::{debug, info, warn};

use super::form::{ReservationForm, ReservationInput};
use crate::app::templates::HomePage;
use crate::app::AppState;
use crate::core::error::AppResult;

pub const RESERVATION_CREATED: &str = "Reservation created successfully!";

/// GET / ：渲染空表单
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let form = ReservationForm::new();
    render_form(&state, &form)
}

/// POST / ：校验并保存；无效时带错误重新渲染，状态码仍为 200。
///
/// 无法解析的请求体（缺少 Content-Type、multipart 等）按空提交处理。
pub async fn submit_reservation(
    State(state): State<AppState>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> AppResult<Response> {
    let input = match body {
        Ok(Form(pairs)) => ReservationInput::from_pairs(pairs),
        Err(rejection) => {
            warn!("Unreadable reservation body, treating as empty: {}", rejection);
            ReservationInput::default()
        }
    };
    let mut form = ReservationForm::bind(input);

    if form.is_valid() {
        let reservation = form.save(&state.reservation_service).await?;
        info!("Reservation {} saved", reservation.id);
        return Ok(RESERVATION_CREATED.into_response());
    }

    debug!("Reservation form rejected: {:?}", form.errors());
    Ok(render_form(&state, &form)?.into_response())
}

fn render_form(state: &AppState, form: &ReservationForm) -> AppResult<Html<String>> {
    let page = HomePage { form: form.view() };
    Ok(Html(state.templates.render_home(&page)?))
}
