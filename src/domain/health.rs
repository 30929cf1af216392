//! 健康检查领域模型

use serde::Serialize;

/// 项目元数据（构建时固定）
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectMetadata {
    pub project: String,
    pub authors: Vec<String>,
}

impl ProjectMetadata {
    pub fn new(project: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            project: project.into(),
            authors,
        }
    }

    /// 解析 Cargo 风格的作者列表（`A <a@x>:B`），去掉邮箱部分
    pub fn parse_authors(raw: &str) -> Vec<String> {
        raw.split(':')
            .map(|a| a.split('<').next().unwrap_or(a).trim())
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 健康检查响应
///
/// GET / 的响应体，每次请求新建
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HealthReport {
    pub project: String,
    pub authors: Vec<String>,
    /// user 类别的 CPU 占比（两位小数百分比）
    pub usage: f64,
    /// 进程运行时间（秒）
    pub uptime: f64,
    /// Unix 毫秒时间戳
    pub time: i64,
}
