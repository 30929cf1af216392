//! 配置模块
//!
//! 环境变量解析与构建时常量

pub mod env;

pub use env::EnvConfig;
