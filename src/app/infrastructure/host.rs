use thiserror::Error;

use crate::app::domain::document::{OpenDocument, TabGroup};
use crate::app::domain::settings::SortSettings;

/// Failure reported by the host editor for a single tab operation, e.g. a
/// move or focus request rejected because the tab was closed concurrently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HostError(String);

impl HostError {
    /// An empty host message falls back to a generic description.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self("Unknown Exception".to_string())
        } else {
            Self(message)
        }
    }
}

/// Tab/document surface of the host editor. All methods that reach into the
/// host are fallible; the core reports failures and never retries.
pub trait TabHost {
    /// Snapshot of every tab group, in display order.
    fn tab_groups(&self) -> Vec<TabGroup>;

    /// Snapshot of the group that currently has focus.
    fn active_group(&self) -> Option<TabGroup>;

    /// The focused text document, if the focused tab holds one.
    fn focused_document(&self) -> Option<OpenDocument>;

    /// Bring `doc` to front in its group, without opening a duplicate
    /// preview tab.
    fn focus(&mut self, doc: &OpenDocument) -> Result<(), HostError>;

    /// Move `doc` to the 1-based `position` within its group.
    fn move_to_position(&mut self, doc: &OpenDocument, position: usize) -> Result<(), HostError>;
}

/// One cancellable progress session, shown by the host (typically in a
/// notification area) until dropped.
pub trait ProgressSession {
    fn set_message(&mut self, message: &str);

    fn advance(&mut self, percent: f64);

    /// Whether the user asked to cancel. Checked at step boundaries only.
    fn is_cancelled(&self) -> bool;
}

pub trait ProgressHost {
    fn begin(&mut self, title: &str) -> Box<dyn ProgressSession>;
}

/// User-facing messages. Commands never propagate errors to the host; every
/// failure ends up here instead.
pub trait NotificationHost {
    fn info(&mut self, message: &str);

    /// Show `message` with action buttons and wait for the user's choice.
    fn ask(&mut self, message: &str, actions: &[&str]) -> Option<String>;

    fn error(&mut self, message: &str);
}

/// Persisted configuration. Loaded fresh at every invocation; the core never
/// caches settings across invocations.
pub trait ConfigStore {
    fn load(&self) -> SortSettings;

    fn set_sort_automatically(&mut self, value: bool) -> Result<(), HostError>;
}

/// `ConfigStore` backed by the settings file under the platform config
/// directory.
pub struct FileConfigStore;

impl ConfigStore for FileConfigStore {
    fn load(&self) -> SortSettings {
        SortSettings::load()
    }

    fn set_sort_automatically(&mut self, value: bool) -> Result<(), HostError> {
        let mut settings = SortSettings::load();
        settings.sort_automatically = value;
        settings.save().map_err(|e| HostError::new(e.to_string()))
    }
}
