//! Services layer - pure business operations.
//!
//! This module contains logic with no host dependencies:
//! - Collation-key comparison
//! - Document ordering
//! - Release-notes versioning

pub mod collate;
pub mod order;
pub mod whatsnew;
