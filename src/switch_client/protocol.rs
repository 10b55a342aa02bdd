//! control server protocol
//! 把 http 响应转换为设备列表和错误类型

use std::collections::HashSet;

use reqwest::Url;

use crate::common::error::{CommandError, FetchError};
use crate::common::http::StatusClass;
use crate::entity::bo::device_bo::{Device, DeviceSnapshot};
use crate::entity::bo::server_config_bo::ServerConfig;
use crate::entity::dto::device_dto::DeviceDto;

const LIST_PATH: &str = "list";
const ON_PATH: &str = "on";
const OFF_PATH: &str = "off";

/// `POST {base}/list`
pub fn list_url(config: &ServerConfig) -> Url {
    config.endpoint(&[LIST_PATH])
}

/// `GET {base}/{device}/on` or `GET {base}/{device}/off`
pub fn power_url(config: &ServerConfig, device_id: &str, on: bool) -> Url {
    config.endpoint(&[device_id, if on { ON_PATH } else { OFF_PATH }])
}

/// parse the `/list` body, one bad record fails the whole list
/// ids must be unique, menu entries are mapped back to devices by id
pub fn parse_device_list(body: &[u8]) -> Result<DeviceSnapshot, FetchError> {
    let records: Vec<DeviceDto> =
        serde_json::from_slice(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.device.as_str()) {
            return Err(FetchError::MalformedResponse(format!("duplicate device id {}", record.device)));
        }
    }
    Ok(DeviceSnapshot::new(records.into_iter().map(Device::from).collect()))
}

/// non success status of a list request
pub fn list_status_error(class: StatusClass) -> Option<FetchError> {
    match class {
        StatusClass::Success => None,
        StatusClass::Unauthorized => Some(FetchError::Unauthorized),
        StatusClass::Failed(code) => Some(FetchError::ServerError(code)),
    }
}

/// non success status of an on/off command
pub fn command_status_error(class: StatusClass) -> Option<CommandError> {
    match class {
        StatusClass::Success => None,
        StatusClass::Unauthorized => Some(CommandError::Unauthorized),
        StatusClass::Failed(code) => Some(CommandError::ServerError(code)),
    }
}
