//! CPU 时间桶领域模型
//!
//! 每个核心的累计 tick 计数（快照）以及聚合后的百分比分布

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// CPU 时间桶类别（封闭集合）
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Bucket {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "nice")]
    Nice,
    #[serde(rename = "sys")]
    System,
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "irq")]
    Irq,
}

impl Bucket {
    /// 所有已知类别
    pub const ALL: [Bucket; 5] = [
        Bucket::User,
        Bucket::Nice,
        Bucket::System,
        Bucket::Idle,
        Bucket::Irq,
    ];

    /// 转换为字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::User => "user",
            Bucket::Nice => "nice",
            Bucket::System => "sys",
            Bucket::Idle => "idle",
            Bucket::Irq => "irq",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个核心的时间桶快照
///
/// 由 OS 采集端每次请求时新建，读取后不再修改
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoreTimeSnapshot {
    times: BTreeMap<Bucket, u64>,
}

impl CoreTimeSnapshot {
    /// 创建空快照
    pub fn new() -> Self {
        Self::default()
    }

    /// 包含全部五个类别的快照
    pub fn from_ticks(user: u64, nice: u64, system: u64, idle: u64, irq: u64) -> Self {
        Self::new()
            .with(Bucket::User, user)
            .with(Bucket::Nice, nice)
            .with(Bucket::System, system)
            .with(Bucket::Idle, idle)
            .with(Bucket::Irq, irq)
    }

    /// 设置某个类别的 tick 数
    pub fn with(mut self, bucket: Bucket, ticks: u64) -> Self {
        self.times.insert(bucket, ticks);
        self
    }

    pub fn get(&self, bucket: Bucket) -> Option<u64> {
        self.times.get(&bucket).copied()
    }

    /// 快照中出现的类别（有序）
    pub fn buckets(&self) -> impl Iterator<Item = Bucket> + '_ {
        self.times.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bucket, u64)> + '_ {
        self.times.iter().map(|(b, t)| (*b, *t))
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// 所有类别 tick 之和
    pub fn total(&self) -> u128 {
        self.times.values().map(|t| *t as u128).sum()
    }
}

/// 聚合结果：类别 -> 百分比（0-100，两位小数）
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UsageBreakdown {
    shares: BTreeMap<Bucket, f64>,
}

impl UsageBreakdown {
    pub(crate) fn from_shares(shares: BTreeMap<Bucket, f64>) -> Self {
        Self { shares }
    }

    pub fn get(&self, bucket: Bucket) -> Option<f64> {
        self.shares.get(&bucket).copied()
    }

    /// user 类别占比，缺失时为 0
    pub fn user(&self) -> f64 {
        self.get(Bucket::User).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bucket, f64)> + '_ {
        self.shares.iter().map(|(b, p)| (*b, *p))
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// 所有百分比之和（理论上接近 100）
    pub fn sum(&self) -> f64 {
        self.shares.values().sum()
    }
}
