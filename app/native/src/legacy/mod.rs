//! Legacy dock configuration.
//!
//! Before the settings store existed, the dock kept its pinned applications in
//! a key file (`~/.config/dock/apps.ini`). This module reads that file and
//! writes it back once the migration flag is set.

mod keyfile;
mod store;

pub use keyfile::KeyFile;
pub use store::{KeyFileStore, LegacyConfigStore};

use crate::core::AppId;
use crate::core::constants::legacy::{
    CONFIG_GROUP, KEY_CMDLINE, KEY_ICON, KEY_INITED, KEY_NAME, KEY_POSITION,
};
use crate::dock::AppMetadata;

/// One docked application as recorded by the legacy dock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyEntry {
    /// Application id.
    pub id: AppId,
    /// Display name.
    pub name: Option<String>,
    /// Icon reference.
    pub icon: Option<String>,
    /// Launch command line.
    pub command_line: Option<String>,
}

impl LegacyEntry {
    fn from_document(document: &KeyFile, id: AppId) -> Self {
        Self {
            name: document.get_string(&id, KEY_NAME),
            icon: document.get_string(&id, KEY_ICON),
            command_line: document.get_string(&id, KEY_CMDLINE),
            id,
        }
    }

    /// Converts the recorded fields into dock metadata. Missing fields are
    /// empty; a missing name falls back to the id.
    #[must_use]
    pub fn metadata(&self) -> AppMetadata {
        AppMetadata::new(
            self.name.clone().unwrap_or_else(|| self.id.clone()),
            self.icon.clone().unwrap_or_default(),
            self.command_line.clone().unwrap_or_default(),
        )
    }
}

/// A loaded legacy configuration file.
#[derive(Debug, Clone)]
pub struct LegacyConfig {
    /// Whether a previous run already migrated this file.
    pub migrated: bool,
    /// Entries in `Position` order, duplicates included. `None` when the file
    /// has no `Position` key.
    pub entries: Option<Vec<LegacyEntry>>,
    /// Access mode of the file on disk.
    pub mode: u32,
    document: KeyFile,
}

impl LegacyConfig {
    /// Interprets a parsed key file.
    #[must_use]
    pub fn from_document(document: KeyFile, mode: u32) -> Self {
        let migrated = document.get_boolean(CONFIG_GROUP, KEY_INITED).unwrap_or(false);
        let entries = document.get_string_list(CONFIG_GROUP, KEY_POSITION).map(|ids| {
            ids.into_iter()
                .filter(|id| {
                    let keep = !id.trim().is_empty();
                    if !keep {
                        tracing::debug!("skipping empty id in legacy position list");
                    }
                    keep
                })
                .map(|id| LegacyEntry::from_document(&document, id))
                .collect()
        });

        Self { migrated, entries, mode, document }
    }

    /// Sets the migration flag in the underlying document.
    pub fn mark_migrated(&mut self) {
        self.document.set_boolean(CONFIG_GROUP, KEY_INITED, true);
        self.migrated = true;
    }

    /// Serializes the underlying document, preserving untouched content.
    #[must_use]
    pub fn to_data(&self) -> String { self.document.to_data() }
}
