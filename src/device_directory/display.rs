//! menu entries built from a snapshot

use crate::entity::bo::device_bo::{Device, DeviceSnapshot};

/// one menu entry, `device_id` maps a selected entry back to its device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub label: String,
    pub enabled: bool,
    pub device_id: Option<String>,
}

impl DisplayEntry {
    fn for_device(device: &Device) -> Self {
        DisplayEntry {
            label: device_label(device),
            enabled: true,
            device_id: Some(device.id.clone()),
        }
    }

    fn placeholder(status: &str) -> Self {
        DisplayEntry {
            label: status.to_string(),
            enabled: false,
            device_id: None,
        }
    }
}

/// "Turn Lamp on" for a device that is off, "Turn Lamp off" for one that is on
pub fn device_label(device: &Device) -> String {
    format!("Turn {}{}", device.display_name, if device.is_on { " off" } else { " on" })
}

/// an empty snapshot gives a single disabled entry carrying the status message
pub fn to_display_list(snapshot: &DeviceSnapshot, status: &str) -> Vec<DisplayEntry> {
    if snapshot.is_empty() {
        return vec![DisplayEntry::placeholder(status)];
    }
    snapshot.devices().iter().map(DisplayEntry::for_device).collect()
}
