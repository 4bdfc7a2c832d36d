//! Application constants for dockd.
//!
//! Settings keys, legacy key-file layout, and default file locations.

/// The application name.
pub const APP_NAME: &str = "dockd";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings store layout.
pub mod settings {
    /// Schema (namespace) the dock settings live in.
    pub const SCHEMA: &str = "dock";

    /// String-sequence key holding the docked application ids.
    pub const KEY_DOCKED_APPS: &str = "docked-apps";

    /// Default settings file name inside the dockd config directory.
    pub const FILE_NAME: &str = "settings.json";
}

/// Legacy key-file layout.
pub mod legacy {
    /// Directory under the user config dir holding the legacy file.
    pub const DIR: &str = "dock";

    /// Legacy file name.
    pub const FILE_NAME: &str = "apps.ini";

    /// Group holding the migration flag and the ordered id list.
    pub const CONFIG_GROUP: &str = "__Config__";

    /// Boolean key marking the file as already migrated.
    pub const KEY_INITED: &str = "inited";

    /// String-list key with the docked ids in display order.
    pub const KEY_POSITION: &str = "Position";

    /// Per-id display name.
    pub const KEY_NAME: &str = "Name";

    /// Per-id icon reference.
    pub const KEY_ICON: &str = "Icon";

    /// Per-id command line.
    pub const KEY_CMDLINE: &str = "CmdLine";

    /// Mode used when the original file mode cannot be read.
    pub const DEFAULT_MODE: u32 = 0o666;
}

/// Desktop entry layout.
pub mod desktop_entry {
    /// Main group of a desktop entry file.
    pub const GROUP: &str = "Desktop Entry";

    /// Desktop entry file extension.
    pub const EXTENSION: &str = "desktop";

    /// Directory name under each XDG data dir.
    pub const APPLICATIONS_DIR: &str = "applications";

    /// Fallback for `$XDG_DATA_DIRS`.
    pub const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";
}

/// Default configuration file names.
pub mod config {
    /// Primary config file name.
    pub const CONFIG_FILE: &str = "config.jsonc";

    /// Alternative config file name (JSON without comments).
    pub const CONFIG_FILE_ALT: &str = "config.json";

    /// Scratch directory for synthesized desktop entries, under the data dir.
    pub const SCRATCH_DIR: &str = "scratch";
}
