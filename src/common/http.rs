//! networking module
//! function:
//! - 创建带有连接超时和总超时的 http client
//! - 把远程服务器的 http 状态码归类：成功 / 未授权 / 其他错误

use std::time::Duration;

use reqwest::StatusCode;

use super::error::{AppError, ErrorCode};
use super::setting::Http;
use crate::debug;

const LOG_TAG: &str = "http";

/// the control server answers 550 as well as 401 when the secret is wrong
const STATUS_UNAUTHORIZED_ALT: u16 = 550;

/// response status, as far as the switch api cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Unauthorized,
    Failed(u16),
}

/// build the shared client, reqwest::Client is cheap to clone and safe to use concurrently
pub fn build_client(http: &Http) -> Result<reqwest::Client, AppError> {
    build_client_with_timeouts(http.connect_timeout(), http.request_timeout())
}

pub fn build_client_with_timeouts(connect_timeout: Duration, request_timeout: Duration) -> Result<reqwest::Client, AppError> {
    debug!(LOG_TAG, "build http client, connect timeout: {:?}, request timeout: {:?}", connect_timeout, request_timeout);
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|e| AppError { code: ErrorCode::HttpClientError, msg: format!("cannot build http client: {e}") })
}

/// classify a status code
/// `strict` only accepts 200 as success, otherwise any 2xx is accepted
pub fn classify_status(status: StatusCode, strict: bool) -> StatusClass {
    let code = status.as_u16();
    if code == StatusCode::UNAUTHORIZED.as_u16() || code == STATUS_UNAUTHORIZED_ALT {
        return StatusClass::Unauthorized;
    }
    let ok = if strict { status == StatusCode::OK } else { status.is_success() };
    if ok {
        StatusClass::Success
    } else {
        StatusClass::Failed(code)
    }
}

/// short description of a transport failure for the logs
pub fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("timeout: {e}")
    } else if e.is_connect() {
        format!("connect failed: {e}")
    } else {
        format!("request failed: {e}")
    }
}
