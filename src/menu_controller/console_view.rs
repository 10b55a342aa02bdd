//! console stand-in for the status bar menu

use std::sync::Mutex;

use super::traits::MenuView;
use crate::device_directory::display::DisplayEntry;

#[derive(Default)]
pub struct ConsoleView {
    // 最近一次渲染的菜单项，用于把输入的序号映射回设备 id
    entries: Mutex<Vec<DisplayEntry>>,
}

impl ConsoleView {
    pub fn new() -> Self {
        ConsoleView::default()
    }

    /// device id of the 1-based menu position, None for placeholders and unknown positions
    pub fn device_at(&self, position: usize) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        position
            .checked_sub(1)
            .and_then(|index| entries.get(index))
            .filter(|entry| entry.enabled)
            .and_then(|entry| entry.device_id.clone())
    }

    fn print(&self, entries: &[DisplayEntry]) {
        for line in format_menu(entries) {
            println!("{}", line);
        }
        *self.entries.lock().unwrap() = entries.to_vec();
    }
}

/// `1. Turn Lamp on`, disabled entries are shown in parentheses without a number
pub fn format_menu(entries: &[DisplayEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if entry.enabled {
                format!("{}. {}", i + 1, entry.label)
            } else {
                format!("   ({})", entry.label)
            }
        })
        .collect()
}

impl MenuView for ConsoleView {
    fn rebuild(&self, entries: &[DisplayEntry]) {
        println!("----------------");
        self.print(entries);
    }

    fn update_labels(&self, entries: &[DisplayEntry]) {
        self.print(entries);
    }
}
