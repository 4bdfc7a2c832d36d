//! Configuration types.

mod root;

pub use root::{
    ConfigError, DockdConfig, config_paths, load_config, load_config_from_path,
    load_config_or_default,
};
