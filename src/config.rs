//! Application configuration module / 应用配置模块
//!
//! Manages application configuration loaded from config.json
//! Creates default config file on first run / 首次运行时创建默认配置文件
//! Terabox credentials come from the process environment only / 账号凭据只从环境变量读取

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration / 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    pub server: ServerConfig,
    /// Terabox upstream configuration / Terabox上游配置
    pub terabox: TeraboxConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Terabox upstream configuration / Terabox上游配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeraboxConfig {
    /// API base URL / 接口基础地址
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Request User-Agent / 请求UA
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Listing page size. Only the first page is ever requested, so folders
    /// with more entries than this are truncated.
    /// 列表单页数量，只请求第一页，超出的目录条目会被截断
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_api_base() -> String {
    "https://www.terabox.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_page_size() -> u32 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            terabox: TeraboxConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8280,
        }
    }
}

impl Default for TeraboxConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Terabox account credentials / Terabox账号凭据
///
/// 进程启动时读取一次，之后不再变化。
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Read credentials from environment / 从环境变量读取凭据
    ///
    /// 缺失的变量按空字符串处理，不做校验，首次登录自然失败。
    pub fn from_env() -> Self {
        Self {
            email: std::env::var("TERABOX_USERNAME").unwrap_or_default(),
            password: std::env::var("TERABOX_PASSWORD").unwrap_or_default(),
        }
    }
}

/// Get the config file path / 获取配置文件路径
fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config() -> Result<AppConfig, String> {
    let config_path = get_config_path();

    if config_path.exists() {
        // Load existing config / 加载现有配置
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        // Create default config / 创建默认配置
        let config = AppConfig::default();
        save_config(&config)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let config_path = get_config_path();

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(&config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}
