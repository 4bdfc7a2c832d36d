//! JSON Schema for the dockd configuration file.

use super::DockdConfig;

/// Generates a JSON Schema for the dockd configuration.
#[must_use]
pub fn generate_schema() -> schemars::Schema { schemars::schema_for!(DockdConfig) }

/// Generates a pretty-printed JSON Schema string for the dockd configuration.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
