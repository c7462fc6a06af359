use serde::Deserialize;

/// GET /api/extract 请求参数
#[derive(Debug, Deserialize)]
pub struct ExtractQuery {
    /// 分享链接
    pub url: Option<String>,
}

/// POST /api/extract 请求体
#[derive(Debug, Deserialize)]
pub struct ExtractBody {
    /// 分享链接
    #[serde(default)]
    pub link: Option<String>,
}
