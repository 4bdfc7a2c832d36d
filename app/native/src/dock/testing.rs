//! Mock collaborators for docked-app manager tests.
//!
//! ```rust,ignore
//! use crate::dock::testing::{MockDockState, MockSettings};
//!
//! let settings = MockSettings::new().with("docked-apps", &["firefox"]);
//! let dock = MockDockState::new().with_installed(&["firefox", "gimp"]);
//! ```

#![cfg(test)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::state::{AppDescriptor, AppMetadata, DockState};
use crate::core::{AppId, DockEvent, Error, EventSink, Result};
use crate::legacy::{KeyFile, LegacyConfig, LegacyConfigStore};
use crate::settings::SettingsBackend;

fn to_ids(values: &[&str]) -> Vec<AppId> { values.iter().map(ToString::to_string).collect() }

// ============================================================================
// Mock Settings
// ============================================================================

/// In-memory settings backend that counts writes.
#[derive(Debug, Default)]
pub struct MockSettings {
    values: Mutex<HashMap<String, Vec<String>>>,
    writes: AtomicUsize,
    flushes: AtomicUsize,
    fail_writes: bool,
}

impl MockSettings {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Pre-populates a key without counting it as a write.
    #[must_use]
    pub fn with(self, key: &str, values: &[&str]) -> Self {
        self.values.lock().insert(key.to_string(), to_ids(values));
        self
    }

    /// Makes every write fail.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Value currently stored under `key`.
    pub fn stored(&self, key: &str) -> Vec<String> {
        self.values.lock().get(key).cloned().unwrap_or_default()
    }

    /// Number of `set_string_sequence` calls, failed ones included.
    pub fn writes(&self) -> usize { self.writes.load(Ordering::SeqCst) }

    /// Number of `flush` calls.
    pub fn flushes(&self) -> usize { self.flushes.load(Ordering::SeqCst) }
}

impl SettingsBackend for MockSettings {
    fn get_string_sequence(&self, key: &str) -> Result<Vec<String>> { Ok(self.stored(key)) }

    fn set_string_sequence(&self, key: &str, values: &[String]) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(Error::settings("mock backend is read-only"));
        }
        self.values.lock().insert(key.to_string(), values.to_vec());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Mock Dock State
// ============================================================================

/// In-memory dock with a fixed set of installed applications.
#[derive(Debug)]
pub struct MockDockState {
    docked: Mutex<Vec<AppId>>,
    installed: HashSet<AppId>,
    synthesized: Mutex<Vec<AppId>>,
    accept_restore: bool,
    noop_docks: AtomicBool,
}

impl Default for MockDockState {
    fn default() -> Self {
        Self {
            docked: Mutex::new(Vec::new()),
            installed: HashSet::new(),
            synthesized: Mutex::new(Vec::new()),
            accept_restore: true,
            noop_docks: AtomicBool::new(false),
        }
    }
}

impl MockDockState {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Marks applications as installed (resolvable).
    #[must_use]
    pub fn with_installed(mut self, ids: &[&str]) -> Self {
        self.installed.extend(to_ids(ids));
        self
    }

    /// Starts with applications already docked.
    #[must_use]
    pub fn with_docked(self, ids: &[&str]) -> Self {
        *self.docked.lock() = to_ids(ids);
        self
    }

    /// Simulates a dock that restores itself from its own source.
    #[must_use]
    pub fn ignoring_restore(mut self) -> Self {
        self.accept_restore = false;
        self
    }

    /// Changes the docked list behind the manager's back.
    pub fn replace_docked(&self, ids: &[&str]) { *self.docked.lock() = to_ids(ids); }

    /// Subsequent dock requests succeed without changing the docked list.
    pub fn accept_without_change(&self) { self.noop_docks.store(true, Ordering::SeqCst); }

    /// Ids synthesized so far, in order.
    pub fn synthesized(&self) -> Vec<AppId> { self.synthesized.lock().clone() }

    fn descriptor(id: &str, name: &str, icon: &str, exec: &str, dir: &Path) -> AppDescriptor {
        AppDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            exec: exec.to_string(),
            path: dir.join(format!("{id}.desktop")),
        }
    }
}

impl DockState for MockDockState {
    fn current_docked_ids(&self) -> Vec<AppId> { self.docked.lock().clone() }

    fn dock(&self, id: &str, metadata: &AppMetadata) -> bool {
        if self.docked.lock().iter().any(|docked| docked == id) {
            return false;
        }
        if self.resolve_or_synthesize(id, metadata).is_none() {
            return false;
        }
        if !self.noop_docks.load(Ordering::SeqCst) {
            self.docked.lock().push(id.to_string());
        }
        true
    }

    fn undock(&self, id: &str) -> bool {
        let mut docked = self.docked.lock();
        match docked.iter().position(|docked| docked == id) {
            Some(pos) => {
                docked.remove(pos);
                true
            }
            None => false,
        }
    }

    fn resolve_app_descriptor(&self, id: &str) -> Option<AppDescriptor> {
        self.installed.contains(id).then(|| {
            Self::descriptor(id, id, id, &format!("/usr/bin/{id}"), Path::new("/usr/share/applications"))
        })
    }

    fn synthesize_descriptor(&self, id: &str, metadata: &AppMetadata) -> Option<AppDescriptor> {
        if !metadata.is_usable() {
            return None;
        }
        self.synthesized.lock().push(id.to_string());
        Some(Self::descriptor(
            id,
            &metadata.title,
            &metadata.icon,
            &metadata.exec,
            &PathBuf::from("/tmp/scratch"),
        ))
    }

    fn restore(&self, ids: &[AppId]) {
        if self.accept_restore {
            *self.docked.lock() = ids.to_vec();
        }
    }
}

// ============================================================================
// Mock Legacy Store
// ============================================================================

/// In-memory legacy key file.
#[derive(Debug)]
pub struct MockLegacyStore {
    content: Mutex<Option<String>>,
    mode: u32,
    saved_mode: Mutex<Option<u32>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    fail_saves: bool,
}

impl MockLegacyStore {
    /// A store whose file does not exist.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            content: Mutex::new(None),
            mode: 0o644,
            saved_mode: Mutex::new(None),
            loads: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
            fail_saves: false,
        }
    }

    /// A store holding `content`.
    #[must_use]
    pub fn with_content(content: &str) -> Self {
        let store = Self::empty();
        *store.content.lock() = Some(content.to_string());
        store
    }

    /// Sets the mode reported for the file.
    #[must_use]
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Makes every save fail.
    #[must_use]
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn content(&self) -> Option<String> { self.content.lock().clone() }

    pub fn loads(&self) -> usize { self.loads.load(Ordering::SeqCst) }

    /// Number of successful saves.
    pub fn saves(&self) -> usize { self.saves.load(Ordering::SeqCst) }

    pub fn saved_mode(&self) -> Option<u32> { *self.saved_mode.lock() }
}

impl LegacyConfigStore for MockLegacyStore {
    fn load(&self, _path: &Path) -> Result<LegacyConfig> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let content = self.content.lock().clone().ok_or_else(|| {
            Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "no legacy file"))
        })?;
        Ok(LegacyConfig::from_document(KeyFile::parse(&content)?, self.mode))
    }

    fn save(&self, _path: &Path, content: &str, mode: u32) -> Result<()> {
        if self.fail_saves {
            return Err(Error::legacy("mock legacy store is read-only"));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.content.lock() = Some(content.to_string());
        *self.saved_mode.lock() = Some(mode);
        Ok(())
    }
}

// ============================================================================
// Recording Events
// ============================================================================

/// Event sink that keeps everything it receives.
#[derive(Debug, Default)]
pub struct RecordingEvents {
    events: Mutex<Vec<DockEvent>>,
}

impl RecordingEvents {
    /// Drains the recorded events.
    pub fn take(&self) -> Vec<DockEvent> { std::mem::take(&mut *self.events.lock()) }
}

impl EventSink for RecordingEvents {
    fn emit(&self, event: DockEvent) { self.events.lock().push(event); }
}
