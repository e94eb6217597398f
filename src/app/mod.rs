//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (documents, settings, commands)
//! - `services/` - Pure operations (collation, ordering, release notes)
//! - `controllers/` - Orchestration (command dispatch, repositioning, auto-sort)
//! - `infrastructure/` - External integrations (host traits, state file, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::commands::SortEditors;
pub use controllers::sorter::SortOutcome;
pub use domain::{
    Command, GroupId, OpenDocument, SettingsChange, SortOrder, SortSettings, Tab, TabContent,
    TabGroup,
};
pub use infrastructure::error::AppError;
pub use infrastructure::host::{
    ConfigStore, FileConfigStore, HostError, NotificationHost, ProgressHost, ProgressSession,
    TabHost,
};
pub use infrastructure::state_store::VersionStore;
