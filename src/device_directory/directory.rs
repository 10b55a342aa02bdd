//! 设备目录：保存最近一次获取的设备列表和状态提示

use super::display::{to_display_list, DisplayEntry};
use super::reconcile::{reconcile, ReconcileResult};
use crate::entity::bo::device_bo::{Device, DeviceSnapshot};
use crate::{debug, info};

const LOG_TAG: &str = "device_directory";

pub const STATUS_NOT_CONFIGURED: &str = "No devices configured";
pub const STATUS_NO_SOCKETS: &str = "No sockets configured";

#[derive(Debug, Clone)]
pub struct DeviceDirectory {
    snapshot: DeviceSnapshot,
    status: String,
}

impl Default for DeviceDirectory {
    fn default() -> Self {
        DeviceDirectory {
            snapshot: DeviceSnapshot::empty(),
            status: STATUS_NOT_CONFIGURED.to_string(),
        }
    }
}

impl DeviceDirectory {
    pub fn new() -> Self {
        DeviceDirectory::default()
    }

    pub fn snapshot(&self) -> &DeviceSnapshot {
        &self.snapshot
    }

    pub fn status(&self) -> &str {
        self.status.as_str()
    }

    pub fn find(&self, device_id: &str) -> Option<&Device> {
        self.snapshot.find(device_id)
    }

    /// replace the snapshot with the result of a successful fetch
    pub fn apply_snapshot(&mut self, next: DeviceSnapshot) -> ReconcileResult {
        let result = reconcile(&self.snapshot, &next);
        if next.is_empty() {
            self.status = STATUS_NO_SOCKETS.to_string();
        }
        match result {
            ReconcileResult::Replaced => info!(LOG_TAG, "device list replaced, {} -> {} devices", self.snapshot.len(), next.len()),
            ReconcileResult::Unchanged => debug!(LOG_TAG, "device list unchanged, {} devices", next.len()),
        }
        self.snapshot = next;
        result
    }

    /// failed fetch, devices stay as they are
    pub fn record_failure(&mut self, status: &str) {
        debug!(LOG_TAG, "status message set to '{}'", status);
        self.status = status.to_string();
    }

    pub fn display_list(&self) -> Vec<DisplayEntry> {
        to_display_list(&self.snapshot, self.status.as_str())
    }
}
