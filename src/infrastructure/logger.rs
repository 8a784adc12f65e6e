//! 日志基础设施

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化控制台与按天滚动的文件日志。
    ///
    /// 返回的 guard 必须存活到进程结束，否则缓冲的日志会丢失。
    /// `RUST_LOG` 优先于配置中的日志级别。
    pub fn init(config: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
        let filter =
            EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

        let appender = rolling::daily(&config.log_path, &config.file_prefix);
        let (writer, guard) = non_blocking(appender);
        let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

        let console_layer = config
            .console_output
            .then(|| fmt::layer().with_target(false).compact());

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }
}
