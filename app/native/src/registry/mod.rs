//! Application registry and the local dock state built on it.

mod desktop_entry;
mod local;

pub use desktop_entry::DesktopEntryRegistry;
pub use local::LocalDockState;
