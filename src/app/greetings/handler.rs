//! 问候处理器

use axum::{extract::Request, response::IntoResponse};

pub const HELLO_TEXT: &str = "Hello, World!";
pub const GREETING_TEXT: &str = "Greetings from the GreetingView!";

/// 函数式处理器，接受任意方法
pub async fn hello(_req: Request) -> &'static str {
    HELLO_TEXT
}

/// 按方法分派的视图，只实现了 GET；其余方法由路由返回 405
pub struct GreetingView;

impl GreetingView {
    pub async fn get() -> impl IntoResponse {
        GREETING_TEXT
    }
}
