//! Module trait definitions.
//!
//! Long-lived components of the daemon are initialized and shut down in a
//! uniform way through [`Module`].

use thiserror::Error;

/// Errors that can occur during module operations.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Module initialization failed.
    #[error("Failed to initialize module '{name}': {reason}")]
    InitializationFailed { name: &'static str, reason: String },

    /// Module is not enabled in configuration.
    #[error("Module '{0}' is not enabled")]
    NotEnabled(&'static str),
}

impl ModuleError {
    /// Creates an initialization failed error.
    pub fn init_failed(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InitializationFailed { name, reason: reason.into() }
    }
}

/// Result type for module operations.
pub type ModuleResult<T> = std::result::Result<T, ModuleError>;

/// Trait for daemon modules that can be initialized and shut down.
///
/// # Example
///
/// ```ignore
/// let mut manager = DockedAppManager::new(backend, legacy, dock_state, events);
/// start_module(&mut manager)?;
/// // ...
/// manager.shutdown();
/// ```
pub trait Module: Send + Sync {
    /// Returns the module name for logging and identification.
    fn name(&self) -> &'static str;

    /// Checks if the module is enabled in configuration.
    ///
    /// Modules that return `false` will not be initialized.
    fn is_enabled(&self) -> bool;

    /// Initializes the module.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails.
    fn init(&mut self) -> ModuleResult<()>;

    /// Shuts down the module. Default implementation does nothing.
    fn shutdown(&mut self) {}
}

/// Initializes `module` if it is enabled.
///
/// # Errors
///
/// Returns [`ModuleError::NotEnabled`] for disabled modules, or the module's
/// own initialization error.
pub fn start_module<M: Module + ?Sized>(module: &mut M) -> ModuleResult<()> {
    if !module.is_enabled() {
        return Err(ModuleError::NotEnabled(module.name()));
    }
    tracing::debug!(module = module.name(), "initializing module");
    module.init()
}
