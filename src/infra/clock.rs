//! 进程时钟

use std::time::Instant;

use crate::services::health::Clock;

/// 以构造时刻为进程启动时间的时钟
#[derive(Clone, Debug)]
pub struct ProcessClock {
    started: Instant,
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Clock for ProcessClock {
    fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
