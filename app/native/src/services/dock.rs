//! Assembles the docked-app manager from configuration.

use std::sync::Arc;

use super::traits::{ModuleResult, start_module};
use crate::config::DockdConfig;
use crate::core::EventSink;
use crate::core::constants::settings::SCHEMA;
use crate::dock::{DockedAppManager, LegacySource};
use crate::registry::{DesktopEntryRegistry, LocalDockState};
use crate::settings::{JsonSettingsStore, SettingsBackend};

/// Opens the JSON settings store named by `config`.
///
/// Returns `None` (and logs why) when the store is unusable; the manager then
/// runs without persistence.
#[must_use]
pub fn open_settings(config: &DockdConfig) -> Option<Arc<dyn SettingsBackend>> {
    let path = config.settings_path();
    match JsonSettingsStore::open(&path, SCHEMA) {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "opened settings store");
            Some(Arc::new(store))
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "cannot open settings store: {err}");
            None
        }
    }
}

/// Builds and initializes a manager over the local dock state.
///
/// # Errors
///
/// Returns an error if the manager module fails to start.
pub fn open_dock_manager(
    config: &DockdConfig,
    events: Arc<dyn EventSink>,
) -> ModuleResult<DockedAppManager> {
    let registry = DesktopEntryRegistry::new(config.application_paths(), config.scratch_path());
    let dock_state = Arc::new(LocalDockState::new(registry));

    let mut manager = DockedAppManager::new(
        open_settings(config),
        LegacySource::key_file(config.legacy_config_path()),
        dock_state,
        events,
    );
    start_module(&mut manager)?;
    Ok(manager)
}
