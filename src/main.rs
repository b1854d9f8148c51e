use clap::Parser;

use json2qti::{build_qti_package, logger, Cli, Config};

fn main() {
    // 解析参数
    let cli = Cli::parse();
    let config = Config::from_cli(cli);

    // 初始化日志
    logger::init(config.verbose_logging);

    // 构建题库包；任何失败都以非零状态退出，错误信息是唯一诊断输出
    if let Err(e) = build_qti_package(&config) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
