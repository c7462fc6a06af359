//! Terabox客户端
//!
//! 支持：
//! - 账号密码登录（cookie写入共享会话）
//! - 分享页提取 shareid / uk
//! - 分享文件夹列表（仅第一页）
//! - 逐文件获取直链
//!
//! 设计原则：
//! - 流程严格线性：登录 → 提取标识 → 列表 → 逐文件直链
//! - 单文件直链失败只记日志并计数，不中断整体

mod client;
mod types;
mod utils;

pub use client::TeraboxClient;
pub use types::{ResolveSummary, ResolvedLink, ShareFile, ShareLocator};
pub use utils::extract_share_ids;
