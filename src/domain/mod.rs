//! 领域模型模块
//!
//! 纯数据结构，不依赖 axum/tokio

pub mod health;
pub mod usage;

// Re-exports for convenience
pub use health::{HealthReport, ProjectMetadata};
pub use usage::{Bucket, CoreTimeSnapshot, UsageBreakdown};
