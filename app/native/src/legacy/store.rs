//! Reading and writing the legacy key file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::{KeyFile, LegacyConfig};
use crate::core::Result;
use crate::core::constants::legacy::DEFAULT_MODE;

/// Access to the legacy configuration file.
pub trait LegacyConfigStore: Send + Sync {
    /// Loads the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is absent, unreadable, or malformed.
    fn load(&self, path: &Path) -> Result<LegacyConfig>;

    /// Replaces the file at `path` with `content`, giving it `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    fn save(&self, path: &Path, content: &str, mode: u32) -> Result<()>;
}

/// [`LegacyConfigStore`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyFileStore;

impl KeyFileStore {
    /// Mode of `path` itself (not a symlink target), or the default mode.
    fn file_mode(path: &Path) -> u32 {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            fs::symlink_metadata(path)
                .map(|meta| meta.permissions().mode() & 0o7777)
                .unwrap_or(DEFAULT_MODE)
        }

        #[cfg(not(unix))]
        {
            let _ = path;
            DEFAULT_MODE
        }
    }
}

impl LegacyConfigStore for KeyFileStore {
    fn load(&self, path: &Path) -> Result<LegacyConfig> {
        let content = fs::read_to_string(path)?;
        let document = KeyFile::parse(&content)?;
        Ok(LegacyConfig::from_document(document, Self::file_mode(path)))
    }

    fn save(&self, path: &Path, content: &str, mode: u32) -> Result<()> {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(content.as_bytes())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file().set_permissions(fs::Permissions::from_mode(mode))?;
        }
        #[cfg(not(unix))]
        let _ = mode;

        temp.as_file().sync_all()?;
        temp.persist(path)?;
        Ok(())
    }
}
