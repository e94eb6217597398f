/// Zero-argument actions the host registers on the core's behalf.
/// The host invokes one per user command; dispatch lives in
/// `controllers::commands`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the focused editor tab to its sorted slot.
    SortActiveEditor,

    /// Sort every tab in the active group.
    SortActiveTabEditors,

    /// Sort every tab in every group.
    SortAllEditors,

    EnableAutoSorting,
    DisableAutoSorting,
}

/// Which configuration key a host change notification affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    AutoSorting,
    Order,
}
