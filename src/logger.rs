//! 进程级日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 整个进程只应调用一次（在 main 里）。`verbose` 为真时默认级别
/// 提到 DEBUG；`RUST_LOG` 环境变量仍可覆盖。日志只是旁路输出，
/// 管线的行为不依赖它。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
