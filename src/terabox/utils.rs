//! Terabox工具函数

use regex::Regex;

use super::types::ShareLocator;

/// 从分享页HTML中提取 shareid 和 uk
///
/// 两个模式各取全文第一个匹配，uk 的值可能带引号也可能不带。
/// 任一模式未命中返回 None，不做两值是否同属一段内嵌JSON的校验。
pub fn extract_share_ids(html: &str) -> Option<ShareLocator> {
    let share_id = Regex::new(r#""shareid":(\d+)"#)
        .ok()
        .and_then(|r| r.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())?;

    let uk = Regex::new(r#""uk":"?(\d+)"?"#)
        .ok()
        .and_then(|r| r.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())?;

    Some(ShareLocator { share_id, uk })
}
