use anyhow::Context;
use restaurant::{
    config::{self, Config},
    create_routes,
    infrastructure::{DatabaseManager, Logger},
    AppState,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)
        .with_context(|| format!("加载配置失败: {}", config_path))?;

    // guard 需存活到进程结束
    let _log_guard = Logger::init(&config.logging).context("初始化日志失败")?;

    info!("Starting restaurant server...");

    let db = DatabaseManager::connect_and_migrate(&config.database)
        .await
        .map_err(|e| {
            error!("Failed to initialize database: {}", e);
            e
        })
        .context("初始化数据库失败")?;

    let state = AppState::new(db.into_pool()).context("加载模板失败")?;

    let seeded = state.menu_service.seed(&config.menu).await?;
    if seeded > 0 {
        info!("Menu seeded with {} items", seeded);
    }

    let app = create_routes(state);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 Restaurant server running on http://{}", listener.local_addr()?);
    info!("   ANY    /function  - Hello, World!");
    info!("   GET    /class     - GreetingView");
    info!("   GET    /          - Reservation form");
    info!("   POST   /          - Submit reservation");

    axum::serve(listener, app).await?;

    Ok(())
}
