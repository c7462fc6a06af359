//! Terabox接口数据类型

use serde::{Deserialize, Serialize};

/// 分享定位符（shareid + uk）
///
/// 两个值都是从分享页HTML里匹配出来的数字字符串，每次请求重新提取，不缓存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLocator {
    pub share_id: String,
    pub uk: String,
}

/// share/list 响应
#[derive(Debug, Deserialize)]
pub struct ShareListResponse {
    pub list: Option<Vec<ShareFile>>,
}

/// 分享文件记录，字段原样保留上游取值
#[derive(Debug, Clone, Deserialize)]
pub struct ShareFile {
    pub server_filename: String,
    #[serde(default)]
    pub size: i64,
    /// 上游的0/1标记，不转布尔
    #[serde(default)]
    pub isdir: i64,
    pub fs_id: u64,
}

/// sharedownload 响应
#[derive(Debug, Deserialize)]
pub struct DownloadResponse {
    pub list: Option<Vec<DownloadItem>>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadItem {
    /// 直链，上游可能返回null
    pub dlink: Option<String>,
}

/// 输出的直链条目
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedLink {
    pub name: String,
    pub size: i64,
    pub direct_link: Option<String>,
}

/// 直链解析汇总
///
/// skipped 统计整次请求失败而被丢弃的文件数，条目本身不带错误标记。
#[derive(Debug, Default)]
pub struct ResolveSummary {
    pub links: Vec<ResolvedLink>,
    pub skipped: usize,
}
