use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // 配置文件错误
    SettingError = 1001,
    // 日志初始化错误
    LoggerError = 1002,
    // http 客户端构建错误
    HttpClientError = 1003,
}

/// start-up error, only used before the menu controller is running
#[derive(Debug)]
pub struct AppError {
    pub code: ErrorCode,
    pub msg: String,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "rc switch engine error code: {}, msg: {}", self.code as u16, self.msg)
    }
}

impl std::error::Error for AppError {}

/// failure of a list (or probe) request against the control server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("no connection to the control server")]
    NoConnection,
    #[error("control server rejected the secret")]
    Unauthorized,
    #[error("control server responded with status {0}")]
    ServerError(u16),
    #[error("malformed device list: {0}")]
    MalformedResponse(String),
    #[error("invalid server address: {0}")]
    InvalidAddress(String),
}

impl FetchError {
    /// text shown in place of the device list when this error is the latest status
    pub fn status_message(&self) -> String {
        match self {
            FetchError::NoConnection => "No connection".to_string(),
            FetchError::Unauthorized => "Unauthorized".to_string(),
            FetchError::ServerError(code) => format!("Server error ({})", code),
            FetchError::MalformedResponse(_) => "Invalid server response".to_string(),
            FetchError::InvalidAddress(_) => "Invalid server address".to_string(),
        }
    }
}

/// failure of an on/off command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no connection to the control server")]
    NoConnection,
    #[error("control server rejected the command")]
    Unauthorized,
    #[error("control server responded with status {0}")]
    ServerError(u16),
}
