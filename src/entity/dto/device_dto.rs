//! wire objects for the control server api

use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::entity::bo::device_bo::Device;

/// body of `POST /list`
#[derive(Debug, Serialize)]
pub struct ListRequestDto<'a> {
    pub secret: &'a str,
}

/// one record of the `/list` response array
#[derive(Debug, Deserialize)]
pub struct DeviceDto {
    pub device: String,
    pub name: String,
    // state 可能缺失或不是字符串，只有 "on" 视为开启
    #[serde(default)]
    pub state: Option<Value>,
}

impl From<DeviceDto> for Device {
    fn from(dto: DeviceDto) -> Self {
        let is_on = matches!(dto.state.as_ref().and_then(Value::as_str), Some("on"));
        Device {
            id: dto.device,
            display_name: dto.name,
            is_on,
        }
    }
}
