//! One-shot migration of the legacy key file into the settings store.
//!
//! The legacy file is read only while its `inited` flag is unset. Every id
//! it lists is kept if the dock collaborator can resolve it to an installed
//! application or synthesize a launchable entry from the recorded metadata.
//! The surviving ids are written to the settings store before the flag is
//! written back, so a crash in between repeats the migration rather than
//! losing it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::manager::save_app_list;
use super::state::DockState;
use crate::core::prelude::*;
use crate::legacy::{KeyFileStore, LegacyConfigStore, LegacyEntry};
use crate::settings::SettingsBackend;

/// Where the legacy configuration lives and how to access it.
#[derive(Clone)]
pub struct LegacySource {
    store: Arc<dyn LegacyConfigStore>,
    path: PathBuf,
}

impl LegacySource {
    /// Creates a source reading `path` through `store`.
    pub fn new(store: Arc<dyn LegacyConfigStore>, path: impl Into<PathBuf>) -> Self {
        Self { store, path: path.into() }
    }

    /// Source reading a key file on the local filesystem.
    pub fn key_file(path: impl Into<PathBuf>) -> Self { Self::new(Arc::new(KeyFileStore), path) }

    /// Path of the legacy file.
    #[must_use]
    pub fn path(&self) -> &Path { &self.path }
}

impl std::fmt::Debug for LegacySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacySource").field("path", &self.path).finish_non_exhaustive()
    }
}

/// What a migration attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Migration already ran in this process, or cannot run (no backend, not
    /// ready). Nothing was read.
    Skipped,
    /// The legacy file carries the migrated flag.
    AlreadyMigrated,
    /// No legacy file, an unreadable one, or one without a position list.
    NothingToMigrate,
    /// The listed ids were moved into the settings store.
    Migrated(Vec<AppId>),
}

/// Keeps the first occurrence of each id that resolves or can be synthesized.
fn convert_entries(entries: Vec<LegacyEntry>, dock_state: &dyn DockState) -> Vec<AppId> {
    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(entries.len());

    for entry in entries {
        if !seen.insert(entry.id.clone()) {
            continue;
        }

        if dock_state.resolve_or_synthesize(&entry.id, &entry.metadata()).is_some() {
            ids.push(entry.id);
        } else {
            tracing::warn!(id = %entry.id, "skipping legacy dock entry: not installed and no usable command line");
        }
    }

    ids
}

/// Runs the migration against the legacy file.
///
/// Never fails: every problem is logged and reported through the outcome.
pub(crate) fn migrate(
    source: &LegacySource,
    dock_state: &dyn DockState,
    backend: &dyn SettingsBackend,
) -> MigrationOutcome {
    let path = source.path();
    let mut config = match source.store.load(path) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(path = %path.display(), "no legacy dock config to migrate: {err}");
            return MigrationOutcome::NothingToMigrate;
        }
    };

    if config.migrated {
        return MigrationOutcome::AlreadyMigrated;
    }

    let outcome = match config.entries.take() {
        None => {
            tracing::debug!("legacy dock config has no position list");
            MigrationOutcome::NothingToMigrate
        }
        Some(entries) => {
            let ids = convert_entries(entries, dock_state);
            if let Err(err) = save_app_list(backend, &ids) {
                // Leave the flag unset so the next start retries.
                tracing::warn!("failed to persist migrated docked apps: {err}");
                return MigrationOutcome::Migrated(ids);
            }
            tracing::info!(count = ids.len(), path = %path.display(), "migrated docked apps from legacy config");
            MigrationOutcome::Migrated(ids)
        }
    };

    config.mark_migrated();
    if let Err(err) = source.store.save(path, &config.to_data(), config.mode) {
        tracing::warn!(path = %path.display(), "failed to save legacy dock config: {err}");
    }

    outcome
}
