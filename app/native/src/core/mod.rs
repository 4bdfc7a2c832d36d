//! Core infrastructure for dockd.
//!
//! - [`error`] - Unified error types
//! - [`events`] - Outbound dock events and sinks
//! - [`constants`] - Settings keys and file layout
//! - [`prelude`] - Common re-exports for convenience

pub mod constants;
pub mod error;
pub mod events;
pub mod prelude;

pub use error::{Error, Result};
pub use events::{DockEvent, EventSink};

/// Opaque application identifier, usually a desktop-entry key.
///
/// Equality is exact string match.
pub type AppId = String;
