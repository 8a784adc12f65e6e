//! 应用配置
//!
//! 配置从 TOML 文件加载，缺失的段落使用默认值，
//! 随后应用环境变量覆盖（`DATABASE_URL`）。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config/restaurant.toml";

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "RESTAURANT_CONFIG";

/// 应用配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 启动时写入空菜单表的菜品
    pub menu: Vec<MenuSeed>,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite 连接串
    pub url: String,
    /// 连接池最大连接数
    pub max_connections: u32,
    /// 获取连接超时（秒）
    pub acquire_timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志目录
    pub log_path: String,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 菜单初始数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSeed {
    pub name: String,
    pub price: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://restaurant.db?mode=rwc".to_string(),
            max_connections: 5,
            acquire_timeout_seconds: 8,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_path: "./logs".to_string(),
            file_prefix: "restaurant".to_string(),
            console_output: true,
            level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }
}

impl Config {
    /// 从配置文件加载配置；文件不存在时使用默认配置。
    /// 之后应用环境变量覆盖并校验。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = if path.as_ref().exists() {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        self.server.socket_addr()?;

        if self.database.url.is_empty() {
            return Err(ConfigError::Validation("数据库连接串不能为空".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation("最大连接数必须大于0".to_string()));
        }

        for seed in &self.menu {
            Decimal::from_str(seed.price.trim()).map_err(|e| {
                ConfigError::Validation(format!("菜品 {} 的价格无效: {}", seed.name, e))
            })?;
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.file_prefix, "restaurant");
        assert!(config.menu.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [server]
            port = 9000

            [[menu]]
            name = "Greek Salad"
            price = "12.50"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.menu.len(), 1);
        assert_eq!(config.menu[0].name, "Greek Salad");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.menu.push(MenuSeed {
            name: "Bruschetta".to_string(),
            price: "cheap".to_string(),
        });
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nconsole_output = false").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.console_output);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_toml_str("[server\nport = 1"),
            Err(ConfigError::Parse(_))
        ));
    }
}
