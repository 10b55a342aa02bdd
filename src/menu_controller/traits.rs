use crate::device_directory::display::DisplayEntry;

/// the menu front end, rendering happens outside the controller
pub trait MenuView: Send + Sync {
    /// discard every entry and build the menu again
    fn rebuild(&self, entries: &[DisplayEntry]);

    /// same devices in the same order, only labels changed
    fn update_labels(&self, entries: &[DisplayEntry]);
}
