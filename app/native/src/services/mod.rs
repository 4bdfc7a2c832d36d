//! Service infrastructure for dockd.
//!
//! - [`traits`] - Module trait definitions
//! - [`dock`] - Wiring of the docked-app manager and its default collaborators

pub mod dock;
pub mod traits;

pub use dock::{open_dock_manager, open_settings};
pub use traits::{Module, ModuleError, ModuleResult, start_module};
