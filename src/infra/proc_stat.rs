//! /proc/stat 每核心 CPU 时间读取
//!
//! 行格式: `cpuN user nice system idle iowait irq softirq steal ...`（单位 jiffies）

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::usage::CoreTimeSnapshot;
use crate::error::HealthError;
use crate::services::health::CpuTimesSource;

/// 默认路径
pub const DEFAULT_PROC_STAT: &str = "/proc/stat";

/// 读取每核心 CPU 时间的采集端（Linux）
#[derive(Clone, Debug)]
pub struct ProcStatReader {
    path: PathBuf,
}

impl Default for ProcStatReader {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_STAT)
    }
}

impl ProcStatReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 解析 /proc/stat 内容，返回每个 `cpuN` 行的快照
    ///
    /// 汇总行 `cpu ` 被跳过
    pub fn parse(content: &str) -> Result<Vec<CoreTimeSnapshot>, HealthError> {
        let cores: Vec<CoreTimeSnapshot> = content
            .lines()
            .filter(|line| is_core_line(line))
            .map(parse_core_line)
            .collect::<Result<_, _>>()?;

        if cores.is_empty() {
            return Err(HealthError::Collect(
                "no per-core cpu lines found".to_string(),
            ));
        }

        Ok(cores)
    }
}

impl CpuTimesSource for ProcStatReader {
    fn snapshot(&self) -> Result<Vec<CoreTimeSnapshot>, HealthError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            HealthError::Collect(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let cores = Self::parse(&content)?;
        debug!(path = %self.path.display(), cores = cores.len(), "Read cpu times");
        Ok(cores)
    }
}

/// `cpu0`, `cpu1`, ... （不含汇总行 `cpu`）
fn is_core_line(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .and_then(|name| name.strip_prefix("cpu"))
        .map(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

fn parse_core_line(line: &str) -> Result<CoreTimeSnapshot, HealthError> {
    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default();

    let fields: Vec<u64> = parts
        .map(|field| {
            field.parse::<u64>().map_err(|_| {
                HealthError::Collect(format!("{}: invalid tick value '{}'", name, field))
            })
        })
        .collect::<Result<_, _>>()?;

    // 至少需要 user nice system idle
    if fields.len() < 4 {
        return Err(HealthError::Collect(format!(
            "{}: expected at least 4 fields, got {}",
            name,
            fields.len()
        )));
    }

    let irq = fields.get(5).copied().unwrap_or(0);
    Ok(CoreTimeSnapshot::from_ticks(
        fields[0], fields[1], fields[2], fields[3], irq,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::usage::Bucket;
    use std::io::Write;

    const SAMPLE: &str = "\
cpu  16119360 0 9736190 91780240 1200 300 50 0 0 0
cpu0 8285130 0 5109250 45425440 600 100 25 0 0 0
cpu1 7834230 0 4626940 46354800 600 200 25 0 0 0
intr 123456 0 0
ctxt 987654
btime 1700000000
processes 4242
";

    #[test]
    fn test_parse_per_core_lines() {
        let cores = ProcStatReader::parse(SAMPLE).unwrap();
        assert_eq!(cores.len(), 2);
        assert_eq!(cores[0].get(Bucket::User), Some(8285130));
        assert_eq!(cores[0].get(Bucket::System), Some(5109250));
        assert_eq!(cores[0].get(Bucket::Idle), Some(45425440));
        assert_eq!(cores[0].get(Bucket::Irq), Some(100));
        assert_eq!(cores[1].get(Bucket::Irq), Some(200));
    }

    #[test]
    fn test_parse_short_line_without_irq() {
        let cores = ProcStatReader::parse("cpu0 10 0 5 85\n").unwrap();
        assert_eq!(cores[0].get(Bucket::Irq), Some(0));
        assert_eq!(cores[0].buckets().count(), 5);
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = ProcStatReader::parse("cpu0 10 0 5\n").unwrap_err();
        assert!(err.to_string().contains("expected at least 4 fields"));
    }

    #[test]
    fn test_parse_invalid_number() {
        let err = ProcStatReader::parse("cpu0 10 x 5 85\n").unwrap_err();
        assert!(err.to_string().contains("invalid tick value 'x'"));
    }

    #[test]
    fn test_parse_only_aggregate_line() {
        let err = ProcStatReader::parse("cpu  1 2 3 4\nintr 0\n").unwrap_err();
        assert!(matches!(err, HealthError::Collect(_)));
    }

    #[test]
    fn test_is_core_line() {
        assert!(is_core_line("cpu0 1 2 3 4"));
        assert!(is_core_line("cpu15 1 2 3 4"));
        assert!(!is_core_line("cpu  1 2 3 4"));
        assert!(!is_core_line("cpufreq 1"));
        assert!(!is_core_line(""));
    }

    #[test]
    fn test_snapshot_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let reader = ProcStatReader::new(file.path());
        let cores = reader.snapshot().unwrap();
        assert_eq!(cores.len(), 2);
    }

    #[test]
    fn test_snapshot_missing_file() {
        let reader = ProcStatReader::new("/nonexistent/proc/stat");
        let err = reader.snapshot().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/proc/stat"));
    }
}
