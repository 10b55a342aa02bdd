//! 比较新旧设备列表，决定菜单是否需要重建

use crate::entity::bo::device_bo::DeviceSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileResult {
    /// same ids at every position, labels may be updated in place
    Unchanged,
    /// device added, removed or moved, the menu has to be rebuilt
    Replaced,
}

/// positional comparison of device ids
/// a reordered list counts as replaced even when no id was added or removed
pub fn reconcile(previous: &DeviceSnapshot, next: &DeviceSnapshot) -> ReconcileResult {
    if previous.len() != next.len() {
        return ReconcileResult::Replaced;
    }
    let same_ids = previous
        .devices()
        .iter()
        .zip(next.devices())
        .all(|(old, new)| old.id == new.id);
    if same_ids {
        ReconcileResult::Unchanged
    } else {
        ReconcileResult::Replaced
    }
}
