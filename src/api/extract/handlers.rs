//! /api/extract 处理器
//!
//! 单次请求的流程严格线性：登录 → 分享页提取标识 → 列表 → 逐文件直链。
//! 任何一步失败（直链的单文件失败除外）直接终止本次请求，不重试。

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::state::AppState;
use super::types::{ExtractBody, ExtractQuery};

/// GET /api/extract?url=<分享链接>
pub async fn extract_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExtractQuery>,
) -> Response {
    run_extract(state, query.url).await
}

/// POST /api/extract {"link": "<分享链接>"}
///
/// 请求体缺失或不是JSON时与缺少link同等对待。
pub async fn extract_post(
    State(state): State<Arc<AppState>>,
    body: Option<Json<ExtractBody>>,
) -> Response {
    let link = body.and_then(|Json(b)| b.link);
    run_extract(state, link).await
}

async fn run_extract(state: Arc<AppState>, link: Option<String>) -> Response {
    let link = match link.filter(|l| !l.is_empty()) {
        Some(link) => link,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing 'link' parameter in request" })),
            )
                .into_response();
        }
    };

    // 登录失败与网络不可达不作区分，都按登录失败返回
    match state.terabox.login().await {
        Ok(result) if result.get("errno").and_then(Value::as_i64) == Some(0) => {}
        Ok(result) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Login failed", "details": result })),
            )
                .into_response();
        }
        Err(e) => {
            tracing::warn!("Login failed: {:#}", e);
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Login failed", "details": Value::Null })),
            )
                .into_response();
        }
    }

    let (files, locator) = match state.terabox.list_share(&link).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Share listing failed: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": e.to_string() })),
            )
                .into_response();
        }
    };

    let summary = state.terabox.resolve_links(&files, &locator).await;

    Json(json!({
        "status": "success",
        "total": summary.links.len(),
        "files": summary.links,
        "skipped": summary.skipped,
    }))
    .into_response()
}
