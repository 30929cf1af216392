//! 环境变量配置加载

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

use crate::domain::health::ProjectMetadata;
use crate::infra::proc_stat::DEFAULT_PROC_STAT;

/// 环境配置
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// 监听地址
    pub host: IpAddr,
    /// 服务监听端口
    pub port: u16,
    /// /proc/stat 路径
    pub proc_stat_path: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: constants::DEFAULT_PORT,
            proc_stat_path: DEFAULT_PROC_STAT.to_string(),
        }
    }
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match load_with_fallback("HEALTH_PROBE_PORT", "PORT") {
            Some(v) => v.parse().unwrap_or_else(|_| {
                warn!(value = %v, "Invalid port, falling back to default");
                defaults.port
            }),
            None => defaults.port,
        };

        let host = match env::var("HEALTH_PROBE_HOST") {
            Ok(v) => v.parse().unwrap_or_else(|_| {
                warn!(value = %v, "Invalid host address, falling back to default");
                defaults.host
            }),
            Err(_) => defaults.host,
        };

        let proc_stat_path = env::var("HEALTH_PROBE_PROC_STAT")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.proc_stat_path);

        Self {
            host,
            port,
            proc_stat_path,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// 加载环境变量，支持 fallback
fn load_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    env::var(primary).ok().or_else(|| env::var(fallback).ok())
}

/// 常量
pub mod constants {
    use super::ProjectMetadata;

    /// 默认端口
    pub const DEFAULT_PORT: u16 = 3000;

    /// 项目名称
    pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");

    /// 作者列表（Cargo 格式，冒号分隔）
    pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

    /// 版本号
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// 构建时固定的项目元数据
    pub fn project_metadata() -> ProjectMetadata {
        ProjectMetadata::new(PROJECT_NAME, ProjectMetadata::parse_authors(AUTHORS))
    }
}
