//! Integration tests for dockd.
//!
//! These tests drive the public API against real files in temporary
//! directories: the JSON settings store, the legacy key file, and desktop
//! entries.
//!
//! ## Running Integration Tests
//!
//! ```bash
//! cargo nextest run -p dockd --test integration
//!
//! # Run specific test module
//! cargo nextest run -p dockd --test integration -E 'test(/dock__migration/)'
//! ```
//!
//! ## Test Organization
//!
//! Tests follow the naming convention `<module>__<test_name>` to allow filtering by module:
//! - `dock__*` - Docked app manager tests

// Allow double-underscore naming for test modules (e.g., dock__migration)
#![allow(non_snake_case)]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]


mod dock__lifecycle;
mod dock__migration;
