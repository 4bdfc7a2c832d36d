//! In-process dock state.
//!
//! Used when no dock renderer is attached, e.g. from the CLI. The docked list
//! lives in memory and is seeded from the durable snapshot at startup.

use parking_lot::Mutex;

use super::DesktopEntryRegistry;
use crate::core::AppId;
use crate::dock::{AppDescriptor, AppMetadata, DockState};

/// [`DockState`] backed by a [`DesktopEntryRegistry`].
#[derive(Debug)]
pub struct LocalDockState {
    registry: DesktopEntryRegistry,
    docked: Mutex<Vec<AppId>>,
}

impl LocalDockState {
    /// Creates an empty dock.
    pub fn new(registry: DesktopEntryRegistry) -> Self {
        Self {
            registry,
            docked: Mutex::new(Vec::new()),
        }
    }
}

impl DockState for LocalDockState {
    fn current_docked_ids(&self) -> Vec<AppId> { self.docked.lock().clone() }

    fn dock(&self, id: &str, metadata: &AppMetadata) -> bool {
        if self.docked.lock().iter().any(|docked| docked == id) {
            tracing::debug!(id, "already docked");
            return false;
        }

        if self.resolve_or_synthesize(id, metadata).is_none() {
            tracing::debug!(id, "cannot dock: no desktop entry and no usable command line");
            return false;
        }

        self.docked.lock().push(id.to_string());
        true
    }

    fn undock(&self, id: &str) -> bool {
        let mut docked = self.docked.lock();
        let Some(pos) = docked.iter().position(|docked| docked == id) else {
            return false;
        };
        docked.remove(pos);
        true
    }

    fn resolve_app_descriptor(&self, id: &str) -> Option<AppDescriptor> { self.registry.resolve(id) }

    fn synthesize_descriptor(&self, id: &str, metadata: &AppMetadata) -> Option<AppDescriptor> {
        self.registry
            .synthesize(id, metadata)
            .map_err(|err| tracing::warn!(id, "failed to synthesize desktop entry: {err}"))
            .ok()
    }

    fn restore(&self, ids: &[AppId]) { *self.docked.lock() = ids.to_vec(); }
}
