//! Common re-exports for convenience.
//!
//! ```ignore
//! use crate::core::prelude::*;
//! ```

pub use super::AppId;
pub use super::constants::{APP_NAME, APP_VERSION};
pub use super::error::{Error, Result};
pub use super::events::{self, DockEvent, EventSink};
