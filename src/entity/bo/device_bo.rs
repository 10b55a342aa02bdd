//! 设备实体类，菜单中的每一项对应一个设备

/// one remotely controllable switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    // 服务器分配的设备 id
    pub id: String,
    // 显示名称
    pub display_name: String,
    // 最后一次获取到的开关状态
    pub is_on: bool,
}

impl Device {
    pub fn new(id: &str, display_name: &str, is_on: bool) -> Self {
        Device {
            id: id.to_string(),
            display_name: display_name.to_string(),
            is_on,
        }
    }
}

/// full ordered device list from one successful list fetch
/// order is kept exactly as the server sent it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSnapshot {
    devices: Vec<Device>,
}

impl DeviceSnapshot {
    pub fn new(devices: Vec<Device>) -> Self {
        DeviceSnapshot { devices }
    }

    pub fn empty() -> Self {
        DeviceSnapshot::default()
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// find device by its server id
    pub fn find(&self, device_id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == device_id)
    }
}
