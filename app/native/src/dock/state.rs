//! The live dock collaborator.
//!
//! [`DockState`] is the authority on which applications are docked right now
//! and the only component that actually pins or unpins them. The manager
//! consults it and mirrors its view into durable storage.

use std::path::PathBuf;

use crate::core::AppId;

/// Optional presentation data supplied with a dock request or found in the
/// legacy configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppMetadata {
    /// Tooltip / display name.
    pub title: String,
    /// Icon name or path.
    pub icon: String,
    /// Command line used to launch the application.
    pub exec: String,
}

impl AppMetadata {
    /// Creates metadata from its three fields.
    pub fn new(title: impl Into<String>, icon: impl Into<String>, exec: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            exec: exec.into(),
        }
    }

    /// Metadata can stand in for a missing descriptor only when it knows how
    /// to launch the application.
    #[must_use]
    pub fn is_usable(&self) -> bool { !self.exec.trim().is_empty() }
}

/// A resolved application description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Application id.
    pub id: AppId,
    /// Display name.
    pub name: String,
    /// Icon name or path.
    pub icon: String,
    /// Launch command.
    pub exec: String,
    /// Desktop entry file backing the descriptor.
    pub path: PathBuf,
}

/// Live dock authority.
///
/// All methods are called with the manager's lock held, so implementations
/// never see two manager requests at once.
pub trait DockState: Send + Sync {
    /// Ids currently docked, in display order.
    fn current_docked_ids(&self) -> Vec<AppId>;

    /// Docks `id`. Returns `false` when the request is not valid, e.g. the
    /// application cannot be resolved and `metadata` is not usable.
    fn dock(&self, id: &str, metadata: &AppMetadata) -> bool;

    /// Undocks `id`. Returns `false` when `id` is not docked.
    fn undock(&self, id: &str) -> bool;

    /// Looks up an installed application.
    fn resolve_app_descriptor(&self, id: &str) -> Option<AppDescriptor>;

    /// Creates a minimal launchable descriptor from `metadata`.
    fn synthesize_descriptor(&self, id: &str, metadata: &AppMetadata) -> Option<AppDescriptor>;

    /// Resolves an installed application, falling back to synthesizing one.
    fn resolve_or_synthesize(&self, id: &str, metadata: &AppMetadata) -> Option<AppDescriptor> {
        self.resolve_app_descriptor(id)
            .or_else(|| self.synthesize_descriptor(id, metadata))
    }

    /// Offers the durable snapshot loaded at startup.
    ///
    /// Implementations that restore themselves from another source ignore it;
    /// the startup reconciliation then persists whatever they report.
    fn restore(&self, _ids: &[AppId]) {}
}
