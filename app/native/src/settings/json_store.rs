//! JSON-file settings store.
//!
//! The file holds one object per schema:
//!
//! ```json
//! { "dock": { "docked-apps": ["firefox", "org.gnome.Terminal"] } }
//! ```
//!
//! Keys and schemas this store does not touch are written back unchanged.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use super::SettingsBackend;
use crate::core::{Error, Result};

#[derive(Debug, Default)]
struct StoreState {
    document: Map<String, Value>,
    dirty: bool,
}

/// File-backed [`SettingsBackend`] scoped to one schema.
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    schema: String,
    state: Mutex<StoreState>,
}

impl JsonSettingsStore {
    /// Opens the store at `path`. A missing file opens as an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a JSON
    /// object.
    pub fn open(path: impl Into<PathBuf>, schema: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let document = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&content)? {
                    Value::Object(map) => map,
                    _ => {
                        return Err(Error::settings(format!(
                            "{} does not contain a JSON object",
                            path.display()
                        )));
                    }
                }
            }
        } else {
            Map::new()
        };

        Ok(Self {
            path,
            schema: schema.into(),
            state: Mutex::new(StoreState { document, dirty: false }),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    fn write_atomically(&self, document: &Map<String, Value>) -> Result<()> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut temp, document)?;
        temp.write_all(b"\n")?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path)?;
        Ok(())
    }
}

impl SettingsBackend for JsonSettingsStore {
    fn get_string_sequence(&self, key: &str) -> Result<Vec<String>> {
        let state = self.state.lock();
        let Some(value) = state.document.get(&self.schema).and_then(|schema| schema.get(key))
        else {
            return Ok(Vec::new());
        };

        let Value::Array(items) = value else {
            return Err(Error::settings(format!("{}.{key} is not a string sequence", self.schema)));
        };

        items
            .iter()
            .map(|item| {
                item.as_str().map(ToString::to_string).ok_or_else(|| {
                    Error::settings(format!("{}.{key} contains a non-string value", self.schema))
                })
            })
            .collect()
    }

    fn set_string_sequence(&self, key: &str, values: &[String]) -> Result<()> {
        let mut state = self.state.lock();
        let schema = state
            .document
            .entry(self.schema.clone())
            .or_insert_with(|| Value::Object(Map::new()));

        let Value::Object(section) = schema else {
            return Err(Error::settings(format!("{} is not an object", self.schema)));
        };

        section.insert(
            key.to_string(),
            Value::Array(values.iter().cloned().map(Value::String).collect()),
        );
        state.dirty = true;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        if !state.dirty {
            return Ok(());
        }

        self.write_atomically(&state.document)?;
        state.dirty = false;
        tracing::debug!(path = %self.path.display(), "settings flushed");
        Ok(())
    }
}
