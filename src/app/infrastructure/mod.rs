//! Infrastructure layer - external integrations.
//!
//! This module contains everything that touches the outside world:
//! - Host editor traits (tabs, progress, notifications, configuration)
//! - The versioned-state file
//! - The error type

pub mod error;
pub mod host;
pub mod state_store;
