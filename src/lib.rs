//! Sorting core for editor tabs.
//!
//! Orders the open document tabs of a host code editor by filename or full
//! path - numeric-aware, case-insensitive, punctuation-insensitive - and
//! repositions them one move at a time, on demand or automatically as new
//! tabs open. Pinned tabs always sort last and are never moved.
//!
//! The host editor is reached exclusively through the traits in
//! [`app::infrastructure::host`]; this crate owns no window and no event
//! loop. A host embeds the crate by constructing a [`SortEditors`]
//! dispatcher, registering one command per [`Command`] variant, and
//! forwarding tab-open events, configuration changes and event-loop ticks.

pub mod app;

pub use app::controllers::commands::SortEditors;
pub use app::controllers::sorter::{sort_active_editor, sort_all_editors, SortOutcome};
pub use app::domain::{
    Command, GroupId, OpenDocument, SettingsChange, SortOrder, SortSettings, Tab, TabContent,
    TabGroup,
};
pub use app::infrastructure::error::AppError;
pub use app::infrastructure::host::{
    ConfigStore, FileConfigStore, HostError, NotificationHost, ProgressHost, ProgressSession,
    TabHost,
};
pub use app::infrastructure::state_store::VersionStore;
pub use app::services::order::sorted_documents;
pub use app::services::whatsnew::prompt_release_notes;
