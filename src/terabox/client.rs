//! Terabox客户端核心实现

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::header::REFERER;
use reqwest::Client;
use serde_json::Value;

use crate::config::{Credentials, TeraboxConfig};
use super::types::*;
use super::utils::extract_share_ids;

/// 登录接口路径
const LOGIN_PATH: &str = "/api/user/login";
/// 分享列表接口路径
const SHARE_LIST_PATH: &str = "/share/list";
/// 直链接口路径
const SHARE_DOWNLOAD_PATH: &str = "/api/sharedownload";

/// Terabox客户端
///
/// 持有进程内唯一的HTTP会话（cookie jar），登录产生的cookie由传输层
/// 写入该会话，后续列表和直链请求直接复用。
pub struct TeraboxClient {
    config: TeraboxConfig,
    credentials: Credentials,
    client: Client,
}

impl TeraboxClient {
    pub fn new(config: TeraboxConfig, credentials: Credentials) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .build()
            .unwrap();

        Self {
            config,
            credentials,
            client,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base.trim_end_matches('/'), path)
    }

    /// 登录Terabox
    ///
    /// 返回登录接口的原始JSON，调用方以 errno == 0 判定成功；
    /// 网络失败或响应不是JSON时返回错误，调用方与errno非0同等对待。
    pub async fn login(&self) -> Result<Value> {
        tracing::info!("Logging in to Terabox...");

        let params = [
            ("email", self.credentials.email.as_str()),
            ("pwd", self.credentials.password.as_str()),
        ];

        let response = self
            .client
            .post(self.api_url(LOGIN_PATH))
            .form(&params)
            .send()
            .await
            .context("Login request failed / 登录请求失败")?
            .error_for_status()
            .context("Login endpoint returned error status / 登录接口返回错误状态")?;

        let json: Value = response
            .json()
            .await
            .context("Failed to parse login response / 解析登录响应失败")?;

        Ok(json)
    }

    /// 获取分享文件夹的文件列表
    ///
    /// 先请求分享页HTML提取 shareid/uk，再请求列表接口。
    /// 只请求第一页，条目数超过 page_size 的目录会被截断。
    pub async fn list_share(&self, share_url: &str) -> Result<(Vec<ShareFile>, ShareLocator)> {
        let html = self
            .client
            .get(share_url)
            .send()
            .await
            .context("Failed to fetch share page / 请求分享页面失败")?
            .text()
            .await
            .context("Failed to read share page / 读取分享页面失败")?;

        let locator = extract_share_ids(&html)
            .ok_or_else(|| anyhow!("Could not extract folder ID or user key / 无法提取分享ID或用户标识"))?;

        let num = self.config.page_size.to_string();
        let response = self
            .client
            .get(self.api_url(SHARE_LIST_PATH))
            .query(&[
                ("shareid", locator.share_id.as_str()),
                ("uk", locator.uk.as_str()),
                ("page", "1"),
                ("num", num.as_str()),
                ("order", "filename"),
            ])
            .send()
            .await
            .context("Share list request failed / 请求文件列表失败")?
            .error_for_status()
            .context("Share list endpoint returned error status / 文件列表接口返回错误状态")?;

        let data: ShareListResponse = response
            .json()
            .await
            .map_err(|_| anyhow!("Failed to get file list / 获取文件列表失败"))?;

        let files = data
            .list
            .ok_or_else(|| anyhow!("Failed to get file list / 获取文件列表失败"))?;

        if files.len() as u32 >= self.config.page_size {
            tracing::warn!(
                "Share listing returned {} entries, folder may be truncated at page size {}",
                files.len(),
                self.config.page_size
            );
        }

        Ok((files, locator))
    }

    /// 逐文件请求直链
    ///
    /// 每个文件一次独立请求，严格串行。目录条目不做过滤，同样走一次
    /// 直链请求。单文件失败记录日志并计入 skipped，输出里不保留该文件。
    pub async fn resolve_links(&self, files: &[ShareFile], locator: &ShareLocator) -> ResolveSummary {
        let mut summary = ResolveSummary::default();

        for file in files {
            match self.resolve_one(file, locator).await {
                Ok(dlink) => summary.links.push(ResolvedLink {
                    name: file.server_filename.clone(),
                    size: file.size,
                    direct_link: dlink,
                }),
                Err(e) => {
                    tracing::warn!(
                        "Failed to resolve direct link for {}: {:#}",
                        file.server_filename,
                        e
                    );
                    summary.skipped += 1;
                }
            }
        }

        summary
    }

    /// 请求单个文件的直链，dlink 可能为null并原样带出
    async fn resolve_one(&self, file: &ShareFile, locator: &ShareLocator) -> Result<Option<String>> {
        let fid_list = format!("[{}]", file.fs_id);
        let params = [
            ("shareid", locator.share_id.as_str()),
            ("uk", locator.uk.as_str()),
            ("product", "share"),
            ("fid_list", fid_list.as_str()),
        ];

        let referer = format!("{}/", self.config.api_base.trim_end_matches('/'));
        let response = self
            .client
            .post(self.api_url(SHARE_DOWNLOAD_PATH))
            .header(REFERER, referer)
            .form(&params)
            .send()
            .await
            .context("Direct link request failed / 直链请求失败")?
            .error_for_status()
            .context("Direct link endpoint returned error status / 直链接口返回错误状态")?;

        let data: DownloadResponse = response
            .json()
            .await
            .context("Failed to parse direct link response / 解析直链响应失败")?;

        let item = data
            .list
            .and_then(|mut list| {
                if list.is_empty() {
                    None
                } else {
                    Some(list.remove(0))
                }
            })
            .ok_or_else(|| anyhow!("Direct link response has no list / 直链响应缺少list字段"))?;

        Ok(item.dlink)
    }
}
