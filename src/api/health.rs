//! 健康检查 API
//!
//! 包含 GET / 端点

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::domain::health::HealthReport;
use crate::error::ApiResult;
use crate::state::AppState;

/// 创建健康检查路由
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(health_check))
}

/// 健康检查 - 返回项目信息、CPU user 占比、运行时间与时间戳
///
/// GET /
/// 无需认证
async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthReport>> {
    let report = state.health.report()?;
    Ok(Json(report))
}
