//! 服务模块
//!
//! CPU 使用率聚合与健康报告

pub mod health;
pub mod usage;

pub use health::{Clock, CpuTimesSource, HealthService};
pub use usage::UsageAggregator;
