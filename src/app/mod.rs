//! 应用层：路由、共享状态与各业务模块

pub mod greetings;
pub mod menu;
pub mod reservations;
pub mod templates;

use axum::{
    http::Uri,
    middleware,
    routing::{any, get},
    Router,
};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::{error::AppError, middleware::request_logging_middleware};
use greetings::GreetingView;
use menu::MenuService;
use reservations::ReservationService;
use templates::Templates;

/// 处理器共享的状态，数据库句柄显式注入
#[derive(Clone)]
pub struct AppState {
    pub reservation_service: ReservationService,
    pub menu_service: MenuService,
    pub templates: Templates,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Result<Self, tera::Error> {
        Ok(Self {
            reservation_service: ReservationService::new(db.clone()),
            menu_service: MenuService::new(db),
            templates: Templates::new()?,
        })
    }
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/function", any(greetings::hello))
        .route("/class", get(GreetingView::get))
        .route(
            "/",
            get(reservations::handler::home).post(reservations::handler::submit_reservation),
        )
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("路径 {} 不存在", uri.path()))
}
