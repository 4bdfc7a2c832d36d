//! Docked application tracking.
//!
//! - [`list`] - Ordered, duplicate-free id list
//! - [`state`] - The live dock collaborator
//! - [`migration`] - One-shot legacy key-file migration
//! - [`manager`] - The persisted list manager

pub mod list;
pub mod manager;
pub mod migration;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use list::{DockedAppList, dedup_preserving_order};
pub use manager::{DockedAppManager, Lifecycle};
pub use migration::{LegacySource, MigrationOutcome};
pub use state::{AppDescriptor, AppMetadata, DockState};
