//! CPU 使用率聚合
//!
//! 将每个核心的时间桶快照汇总为各类别的百分比分布

use std::collections::BTreeMap;

use crate::domain::usage::{Bucket, CoreTimeSnapshot, UsageBreakdown};
use crate::error::UsageError;

/// CPU 使用率聚合器（纯函数，无状态）
pub struct UsageAggregator;

impl UsageAggregator {
    /// 聚合所有核心的快照
    ///
    /// 第一个快照的类别集合决定期望集合，其余快照必须完全一致。
    /// 每个类别的结果为 `round(category / total * 10000) / 100`。
    ///
    /// # Errors
    /// 以下情况返回 `UsageError::InvalidInput`：
    /// - 快照列表为空
    /// - 第一个快照不含任何类别
    /// - 某个快照的类别集合与第一个不同
    /// - 所有 tick 之和为 0
    pub fn aggregate(snapshots: &[CoreTimeSnapshot]) -> Result<UsageBreakdown, UsageError> {
        let first = snapshots
            .first()
            .ok_or_else(|| UsageError::InvalidInput("no cpu snapshots".to_string()))?;

        let buckets: Vec<Bucket> = first.buckets().collect();
        if buckets.is_empty() {
            return Err(UsageError::InvalidInput(
                "cpu snapshot has no time buckets".to_string(),
            ));
        }

        let mut total: u128 = 0;
        let mut totals: BTreeMap<Bucket, u128> = buckets.iter().map(|b| (*b, 0)).collect();

        for (core, snapshot) in snapshots.iter().enumerate() {
            if !snapshot.buckets().eq(buckets.iter().copied()) {
                return Err(UsageError::InvalidInput(format!(
                    "core {} reports buckets [{}], expected [{}]",
                    core,
                    join(snapshot.buckets()),
                    join(buckets.iter().copied())
                )));
            }

            for (bucket, ticks) in snapshot.iter() {
                total += ticks as u128;
                if let Some(sum) = totals.get_mut(&bucket) {
                    *sum += ticks as u128;
                }
            }
        }

        if total == 0 {
            return Err(UsageError::InvalidInput(
                "total cpu ticks is zero".to_string(),
            ));
        }

        let shares = totals
            .into_iter()
            .map(|(bucket, sum)| (bucket, round_percent(sum as f64 / total as f64)))
            .collect();

        Ok(UsageBreakdown::from_shares(shares))
    }
}

/// 比例 -> 两位小数百分比
fn round_percent(ratio: f64) -> f64 {
    (ratio * 10000.0).round() / 100.0
}

fn join(buckets: impl Iterator<Item = Bucket>) -> String {
    buckets.map(|b| b.as_str()).collect::<Vec<_>>().join(", ")
}
