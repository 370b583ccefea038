/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info。
/// 日志写到 stderr，避免与终端界面的 stdout 输出交错
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 面试助手客户端启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 服务地址: {}", config.base_url);
    info!("⏱️ 请求超时: {} 秒", config.request_timeout_secs);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
