/// Identifies a tab group: one column/region of the editor holding an
/// ordered run of tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u64);

/// What a tab is showing. Only plain text documents are ever sorted or
/// moved; diffs, webviews and anything else stay where they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    Text { path: String },
    Diff { original: String, modified: String },
    Webview { view_type: String },
    Other,
}

/// One tab as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub content: TabContent,
    pub pinned: bool,
}

/// Snapshot of one tab group. Tabs appear in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub id: GroupId,
    pub tabs: Vec<Tab>,
}

/// Snapshot of a text-document tab, the unit the sorter orders and moves.
/// The host owns the tab's lifecycle; the core only reads snapshots and
/// issues reposition requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    pub path: String,
    pub pinned: bool,
    pub group: GroupId,
}

impl OpenDocument {
    /// Last path segment, used by filename-only ordering. Host paths use
    /// forward slashes regardless of platform.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}
