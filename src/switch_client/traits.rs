use async_trait::async_trait;

use crate::common::error::{CommandError, FetchError};
use crate::entity::bo::device_bo::DeviceSnapshot;
use crate::entity::bo::server_config_bo::ServerConfig;

/// talks to the control server
/// implementations hold no per request state and may be called concurrently
#[async_trait]
pub trait SwitchTransport: Send + Sync {
    /// fetch the current device list
    async fn list_devices(&self, config: &ServerConfig) -> Result<DeviceSnapshot, FetchError>;

    /// turn one device on or off
    async fn set_power(&self, config: &ServerConfig, device_id: &str, on: bool) -> Result<(), CommandError>;
}
