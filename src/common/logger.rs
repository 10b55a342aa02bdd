//! 日志配置模块
//! 用于管理日志输出

use log::LevelFilter;

use super::error::{AppError, ErrorCode};

/// map the configured level name to a filter, unknown names fall back to info
pub fn level_filter(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// 初始化日志的基础功能
/// calling it again after a logger is installed does nothing
pub fn init_logger(log_level: &str) -> Result<(), AppError> {
    // 检查是否已经初始化
    if log::max_level() != LevelFilter::Off {
        log::debug!("logger already initialized");
        return Ok(());
    }

    pretty_env_logger::formatted_builder()
        .target(pretty_env_logger::env_logger::Target::Stderr)
        .filter_level(level_filter(log_level))
        .try_init()
        .map_err(|e| AppError { code: ErrorCode::LoggerError, msg: format!("cannot init logger: {e}") })?;
    Ok(())
}

/// 带 TAG 输出到日志的宏，支持 trace debug info warn error
#[macro_export]
macro_rules! warn {
    ($tag:expr, $($arg:tt)*) => ({
        log::warn!("[{}] {}", $tag, format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! error {
    ($tag:expr, $($arg:tt)*) => ({
        log::error!("[{}] {}", $tag, format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! info {
    ($tag:expr, $($arg:tt)*) => ({
        log::info!("[{}] {}", $tag, format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! debug {
    ($tag:expr, $($arg:tt)*) => ({
        log::debug!("[{}] {}", $tag, format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! trace {
    ($tag:expr, $($arg:tt)*) => ({
        log::trace!("[{}] {}", $tag, format_args!($($arg)*));
    })
}
