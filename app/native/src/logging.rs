//! Logging initialization using the `tracing` crate.
//!
//! - Uses `RUST_LOG` for filtering
//! - Writes to stderr so command output on stdout stays clean

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the global tracing subscriber.
///
/// Call once at startup, before any logging occurs. Library code never calls
/// this; embedders install their own subscriber.
///
/// - `RUST_LOG=debug` - Show debug and above
/// - `RUST_LOG=dockd=trace,warn` - Trace for dockd, warn for others
///
/// Default level is `info` for release builds and `debug` for debug builds.
pub fn init() {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dockd_lib={default_level},dockd={default_level}")));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(true)
        .compact();

    // A subscriber may already be installed by an embedding process.
    if tracing_subscriber::registry().with(filter).with(subscriber).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
