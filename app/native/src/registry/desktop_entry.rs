//! Desktop entry lookup and scratch entry synthesis.
//!
//! Applications are identified by their desktop entry key. An id resolves
//! when `<id>.desktop` (or `<id>` if it already carries the extension) exists
//! in one of the application directories and describes something runnable.
//! Applications without an installed entry get a minimal one written to the
//! scratch directory so they stay launchable from the dock.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::constants::desktop_entry::{EXTENSION, GROUP};
use crate::core::{Error, Result};
use crate::dock::{AppDescriptor, AppMetadata};
use crate::legacy::KeyFile;

/// Looks up desktop entries and writes scratch entries.
#[derive(Debug, Clone)]
pub struct DesktopEntryRegistry {
    application_dirs: Vec<PathBuf>,
    scratch_dir: PathBuf,
}

impl DesktopEntryRegistry {
    /// Creates a registry searching `application_dirs` in order, then
    /// `scratch_dir`.
    pub fn new(application_dirs: Vec<PathBuf>, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            application_dirs,
            scratch_dir: scratch_dir.into(),
        }
    }

    /// Directory synthesized entries are written to.
    #[must_use]
    pub fn scratch_dir(&self) -> &Path { &self.scratch_dir }

    /// File name for `id`, or `None` if the id cannot name a file.
    fn file_name(id: &str) -> Option<String> {
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
            return None;
        }
        let suffix = format!(".{EXTENSION}");
        if id.ends_with(&suffix) {
            Some(id.to_string())
        } else {
            Some(format!("{id}{suffix}"))
        }
    }

    fn read_entry(id: &str, path: &Path) -> Option<AppDescriptor> {
        let content = fs::read_to_string(path).ok()?;
        let document = match KeyFile::parse(&content) {
            Ok(document) => document,
            Err(err) => {
                tracing::debug!(path = %path.display(), "ignoring malformed desktop entry: {err}");
                return None;
            }
        };

        let exec = document.get_string(GROUP, "Exec").filter(|exec| !exec.trim().is_empty())?;
        if document.get_boolean(GROUP, "Hidden") == Some(true) {
            return None;
        }

        Some(AppDescriptor {
            id: id.to_string(),
            name: document.get_string(GROUP, "Name").unwrap_or_else(|| id.to_string()),
            icon: document.get_string(GROUP, "Icon").unwrap_or_default(),
            exec,
            path: path.to_path_buf(),
        })
    }

    /// Resolves `id` to an installed (or previously synthesized) entry.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<AppDescriptor> {
        let file_name = Self::file_name(id)?;
        self.application_dirs
            .iter()
            .chain(std::iter::once(&self.scratch_dir))
            .map(|dir| dir.join(&file_name))
            .filter(|path| path.is_file())
            .find_map(|path| Self::read_entry(id, &path))
    }

    /// Writes a minimal desktop entry for `id` into the scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `metadata` has no command line, the id cannot be
    /// used as a file name, or the file cannot be written.
    pub fn synthesize(&self, id: &str, metadata: &AppMetadata) -> Result<AppDescriptor> {
        if !metadata.is_usable() {
            return Err(Error::registry(format!("no command line to synthesize '{id}'")));
        }
        let file_name = Self::file_name(id)
            .ok_or_else(|| Error::registry(format!("'{id}' is not a valid desktop entry id")))?;

        let name = if metadata.title.trim().is_empty() { id } else { metadata.title.as_str() };

        let mut entry = KeyFile::new();
        entry.set_string(GROUP, "Name", name);
        entry.set_string(GROUP, "Exec", &metadata.exec);
        entry.set_string(GROUP, "Icon", &metadata.icon);
        entry.set_string(GROUP, "Type", "Application");
        entry.set_boolean(GROUP, "Terminal", false);
        entry.set_boolean(GROUP, "StartupNotify", false);

        fs::create_dir_all(&self.scratch_dir)?;
        let path = self.scratch_dir.join(file_name);
        let mut temp = NamedTempFile::new_in(&self.scratch_dir)?;
        temp.write_all(entry.to_data().as_bytes())?;
        temp.persist(&path)?;

        tracing::debug!(id, path = %path.display(), "synthesized desktop entry");
        Ok(AppDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            icon: metadata.icon.clone(),
            exec: metadata.exec.clone(),
            path,
        })
    }
}
