//! 应用状态

use std::sync::Arc;

use crate::config::{env::constants, EnvConfig};
use crate::infra::{ProcStatReader, ProcessClock};
use crate::services::HealthService;

/// 应用状态
pub struct AppState {
    /// 环境配置
    pub config: EnvConfig,
    /// 健康报告服务
    pub health: HealthService,
}

impl AppState {
    /// 使用真实的 OS 采集端创建应用状态
    pub fn new(config: EnvConfig) -> Self {
        let health = HealthService::new(
            constants::project_metadata(),
            Arc::new(ProcStatReader::new(&config.proc_stat_path)),
            Arc::new(ProcessClock::new()),
        );

        tracing::info!(
            project = %health.metadata().project,
            authors = ?health.metadata().authors,
            proc_stat = %config.proc_stat_path,
            "AppState initialized"
        );

        Self::with_health(config, health)
    }

    /// 注入自定义健康服务（测试或其他平台）
    pub fn with_health(config: EnvConfig, health: HealthService) -> Self {
        Self { config, health }
    }
}
