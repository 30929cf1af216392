//! Health Probe - 健康检查服务
//!
//! Usage:
//! - Normal mode: `health-probe`
//! - With custom port: `health-probe --port 8080`

use health_probe::RuntimeConfig;

/// 解析命令行参数
fn parse_args() -> RuntimeConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = RuntimeConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" if i + 1 < args.len() => {
                config.port_override = args[i + 1].parse().ok();
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    config
}

fn print_help() {
    println!("Health Probe - 健康检查服务");
    println!();
    println!("USAGE:");
    println!("    health-probe [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --port <PORT>    Override the listening port");
    println!("    -h, --help       Print help information");
    println!();
    println!("ENVIRONMENT:");
    println!("    HEALTH_PROBE_PORT / PORT    Listening port (default 3000)");
    println!("    HEALTH_PROBE_HOST           Listening address (default 0.0.0.0)");
    println!("    HEALTH_PROBE_PROC_STAT      CPU times source (default /proc/stat)");
    println!("    RUST_LOG                    Log filter");
}

#[tokio::main]
async fn main() {
    let config = parse_args();

    if let Err(e) = health_probe::run_with_config(config).await {
        tracing::error!(error = %format!("{:#}", e), "Health probe failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
