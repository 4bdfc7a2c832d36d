//! Configuration loading for dockd.
//!
//! The configuration file is optional JSONC. It only tells dockd where its
//! files live; see [`DockdConfig`].

pub mod schema;
mod types;

pub use types::{
    ConfigError, DockdConfig, config_paths, load_config, load_config_from_path,
    load_config_or_default,
};
