//! 健康报告服务
//!
//! 组合 CPU 快照采集、运行时间与项目元数据，生成 `HealthReport`

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::health::{HealthReport, ProjectMetadata};
use crate::domain::usage::CoreTimeSnapshot;
use crate::error::HealthError;
use crate::services::usage::UsageAggregator;

/// 每核心 CPU 时间采集端
pub trait CpuTimesSource: Send + Sync {
    /// 采集一份新的每核心快照
    fn snapshot(&self) -> Result<Vec<CoreTimeSnapshot>, HealthError>;
}

/// 时钟：进程运行时间与当前时间
pub trait Clock: Send + Sync {
    /// 进程已运行秒数
    fn uptime_secs(&self) -> f64;
    /// Unix 毫秒时间戳
    fn now_millis(&self) -> i64;
}

/// 健康报告服务
#[derive(Clone)]
pub struct HealthService {
    metadata: ProjectMetadata,
    cpu_source: Arc<dyn CpuTimesSource>,
    clock: Arc<dyn Clock>,
}

impl HealthService {
    pub fn new(
        metadata: ProjectMetadata,
        cpu_source: Arc<dyn CpuTimesSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            metadata,
            cpu_source,
            clock,
        }
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    /// 生成当前时刻的健康报告
    pub fn report(&self) -> Result<HealthReport, HealthError> {
        let snapshots = self.cpu_source.snapshot().map_err(|e| {
            warn!(error = %e, "Failed to collect cpu snapshot");
            e
        })?;

        let breakdown = UsageAggregator::aggregate(&snapshots).map_err(|e| {
            warn!(error = %e, cores = snapshots.len(), "Failed to aggregate cpu usage");
            e
        })?;

        debug!(cores = snapshots.len(), usage = ?breakdown, "Computed cpu usage");

        Ok(HealthReport {
            project: self.metadata.project.clone(),
            authors: self.metadata.authors.clone(),
            usage: breakdown.user(),
            uptime: self.clock.uptime_secs(),
            time: self.clock.now_millis(),
        })
    }
}
