//! 基础设施模块
//!
//! 封装 OS 依赖（/proc/stat 读取、进程时钟）

pub mod clock;
pub mod proc_stat;

pub use clock::ProcessClock;
pub use proc_stat::ProcStatReader;
