//! dockd - docked application list manager.
//!
//! Keeps the durable, ordered, duplicate-free list of applications pinned to
//! the desktop shell's launcher strip in step with the live dock:
//!
//! - [`dock`] - The list manager, its migration, and the dock collaborator trait
//! - [`settings`] - Settings store holding the persisted list
//! - [`legacy`] - The legacy key-file configuration
//! - [`registry`] - Desktop entry lookup and a local dock state
//! - [`core`] - Errors, events and constants
//! - [`config`] - Configuration file
//! - [`services`] - Module lifecycle and default wiring
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod core;
pub mod dock;
pub mod legacy;
pub mod logging;
pub mod registry;
pub mod services;
pub mod settings;

pub use crate::core::{AppId, DockEvent, Error, EventSink, Result};
pub use crate::dock::{DockedAppManager, Lifecycle};
