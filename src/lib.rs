//! TeraList — Terabox分享文件夹直链提取服务

pub mod api;
pub mod config;
pub mod state;
pub mod terabox;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
