//! The docked application list manager.
//!
//! [`DockedAppManager`] keeps the durable list of docked applications in step
//! with the live [`DockState`]:
//!
//! - on start it loads the list from the settings store, migrates the legacy
//!   key file once, and reconciles with the dock state;
//! - dock and undock requests are delegated to the dock state, and only a
//!   successful request re-persists the list and raises an event;
//! - the list is written only when the dock state reports something
//!   different from the cached copy.
//!
//! Every operation runs under one lock, including the calls into the settings
//! backend and the dock state, so concurrent requests queue instead of racing
//! on the cached list.

use std::sync::Arc;

use parking_lot::Mutex;

use super::list::{DockedAppList, dedup_preserving_order};
use super::migration::{self, LegacySource, MigrationOutcome};
use super::state::{AppMetadata, DockState};
use crate::core::constants::settings::KEY_DOCKED_APPS;
use crate::core::prelude::*;
use crate::services::{Module, ModuleError, ModuleResult};
use crate::settings::SettingsBackend;

/// Manager lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, nothing loaded yet.
    Uninitialized,
    /// Reading the settings store.
    Loading,
    /// Converting the legacy key file.
    Migrating,
    /// Serving requests.
    Ready,
    /// Backend detached; all requests fail.
    Destroyed,
}

/// Writes `ids` under the docked-apps key and flushes the backend.
pub(crate) fn save_app_list(backend: &dyn SettingsBackend, ids: &[AppId]) -> Result<()> {
    backend.set_string_sequence(KEY_DOCKED_APPS, ids)?;
    backend.flush()
}

struct Inner {
    lifecycle: Lifecycle,
    list: DockedAppList,
    backend: Option<Arc<dyn SettingsBackend>>,
    migrated: bool,
}

/// Owner of the persisted docked application list.
pub struct DockedAppManager {
    inner: Mutex<Inner>,
    legacy: LegacySource,
    dock_state: Arc<dyn DockState>,
    events: Arc<dyn EventSink>,
}

impl DockedAppManager {
    /// Creates a manager. Nothing is read until [`initialize`](Self::initialize).
    ///
    /// Without a settings backend the manager still works for the lifetime of
    /// the process but never persists anything and never migrates.
    pub fn new(
        backend: Option<Arc<dyn SettingsBackend>>,
        legacy: LegacySource,
        dock_state: Arc<dyn DockState>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                lifecycle: Lifecycle::Uninitialized,
                list: DockedAppList::new(),
                backend,
                migrated: false,
            }),
            legacy,
            dock_state,
            events,
        }
    }

    /// Loads, migrates and reconciles. Only the first call has any effect.
    pub fn initialize(&self) {
        let mut inner = self.inner.lock();
        if inner.lifecycle != Lifecycle::Uninitialized {
            return;
        }

        inner.lifecycle = Lifecycle::Loading;
        inner.list = Self::load_list(inner.backend.as_deref());

        if inner.backend.is_some() && !inner.migrated {
            inner.lifecycle = Lifecycle::Migrating;
            self.migrate_locked(&mut inner);
        }

        self.dock_state.restore(inner.list.as_slice());
        self.sync_locked(&mut inner);

        inner.lifecycle = Lifecycle::Ready;
        tracing::debug!(count = inner.list.len(), "docked app manager ready");
    }

    fn load_list(backend: Option<&dyn SettingsBackend>) -> DockedAppList {
        let Some(backend) = backend else {
            tracing::warn!("settings backend unavailable; docked apps will not be persisted");
            return DockedAppList::new();
        };

        let stored = backend.get_string_sequence(KEY_DOCKED_APPS).unwrap_or_else(|err| {
            tracing::warn!("failed to read docked apps: {err}");
            Vec::new()
        });

        let list = DockedAppList::from_ids(stored.iter().cloned());
        if list.len() != stored.len() {
            tracing::debug!(removed = stored.len() - list.len(), "removing duplicate docked apps");
            if let Err(err) = save_app_list(backend, list.as_slice()) {
                tracing::warn!("failed to save deduplicated docked apps: {err}");
            }
        }
        list
    }

    fn migrate_locked(&self, inner: &mut Inner) -> MigrationOutcome {
        if inner.migrated {
            return MigrationOutcome::Skipped;
        }
        let Some(backend) = inner.backend.clone() else {
            return MigrationOutcome::Skipped;
        };

        let outcome = migration::migrate(&self.legacy, self.dock_state.as_ref(), backend.as_ref());
        inner.migrated = true;

        if let MigrationOutcome::Migrated(ids) = &outcome {
            inner.list = DockedAppList::from_ids(ids.iter().cloned());
        }
        outcome
    }

    /// Persists the dock state's list if it differs from the cache.
    ///
    /// Returns `true` if the cached list changed.
    fn sync_locked(&self, inner: &mut Inner) -> bool {
        let current = dedup_preserving_order(self.dock_state.current_docked_ids());
        if inner.list.matches(&current) {
            return false;
        }

        if let Some(backend) = inner.backend.as_deref() {
            match save_app_list(backend, &current) {
                Ok(()) => tracing::debug!(apps = ?current, "saved docked apps"),
                Err(err) => tracing::warn!("failed to save docked apps: {err}"),
            }
        }

        inner.list = DockedAppList::from_ids(current);
        true
    }

    /// Runs under the manager lock; sinks must not call back in.
    fn emit(&self, event: DockEvent) {
        tracing::debug!(event = event.name(), id = event.app_id(), "emitting dock event");
        self.events.emit(event);
    }

    /// Runs the legacy migration if it has not run in this process yet.
    pub fn migrate_if_needed(&self) -> MigrationOutcome {
        let mut inner = self.inner.lock();
        if inner.lifecycle != Lifecycle::Ready {
            return MigrationOutcome::Skipped;
        }
        self.migrate_locked(&mut inner)
    }

    /// Re-reads the dock state and persists it if it changed.
    ///
    /// Returns `true` if the cached list changed. Does not raise events.
    pub fn sync_from_dock_state(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.lifecycle != Lifecycle::Ready {
            return false;
        }
        self.sync_locked(&mut inner)
    }

    /// Docked application ids in display order.
    #[must_use]
    pub fn docked_app_list(&self) -> Vec<AppId> {
        let inner = self.inner.lock();
        if inner.lifecycle == Lifecycle::Ready {
            inner.list.to_vec()
        } else {
            Vec::new()
        }
    }

    /// Returns `true` if `id` is docked. Only consults the cached list.
    #[must_use]
    pub fn is_docked(&self, id: &str) -> bool {
        let inner = self.inner.lock();
        inner.lifecycle == Lifecycle::Ready && inner.list.contains(id)
    }

    /// Asks the dock state to dock `id`.
    ///
    /// `title`, `icon` and `cmd` are only needed for applications that have no
    /// installed desktop entry. On success the list is persisted and
    /// [`DockEvent::Docked`] is raised.
    pub fn request_dock(&self, id: &str, title: &str, icon: &str, cmd: &str) -> bool {
        let mut inner = self.inner.lock();
        if inner.lifecycle != Lifecycle::Ready {
            tracing::debug!(id, "dock request before manager is ready");
            return false;
        }

        let metadata = AppMetadata::new(title, icon, cmd);
        if !self.dock_state.dock(id, &metadata) {
            tracing::debug!(id, "dock request rejected");
            return false;
        }

        self.sync_locked(&mut inner);
        self.emit(DockEvent::Docked(id.to_string()));
        true
    }

    /// Asks the dock state to undock `id`.
    ///
    /// On success the list is persisted and [`DockEvent::Undocked`] is raised.
    pub fn request_undock(&self, id: &str) -> bool {
        let mut inner = self.inner.lock();
        if inner.lifecycle != Lifecycle::Ready {
            tracing::debug!(id, "undock request before manager is ready");
            return false;
        }

        if !self.dock_state.undock(id) {
            tracing::debug!(id, "undock request rejected");
            return false;
        }

        self.sync_locked(&mut inner);
        self.emit(DockEvent::Undocked(id.to_string()));
        true
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle { self.inner.lock().lifecycle }

    /// Detaches the settings backend. Later requests fail.
    pub fn destroy(&self) {
        let mut inner = self.inner.lock();
        inner.backend = None;
        inner.list = DockedAppList::new();
        inner.lifecycle = Lifecycle::Destroyed;
    }
}

impl Module for DockedAppManager {
    fn name(&self) -> &'static str { "dock" }

    fn is_enabled(&self) -> bool { true }

    fn init(&mut self) -> ModuleResult<()> {
        self.initialize();
        match self.lifecycle() {
            Lifecycle::Ready => Ok(()),
            state => Err(ModuleError::init_failed(self.name(), format!("manager is {state:?}"))),
        }
    }

    fn shutdown(&mut self) { self.destroy(); }
}
