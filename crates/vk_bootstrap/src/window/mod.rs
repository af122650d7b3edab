//! Window management
//!
//! The sequencer talks to the windowing system through [`WindowBackend`].
//! [`WindowSubsystem`] scopes the process-wide initialization of that system
//! and hands out move-only [`WindowHandle`]s; [`GlfwBackend`] is the
//! production implementation.

use thiserror::Error;

mod backend;
mod glfw_backend;
mod handle;

pub use backend::{WindowBackend, WindowHint};
pub use glfw_backend::{GlfwBackend, GlfwWindow};
pub use handle::{acquire_window, WindowHandle, WindowSubsystem};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing library refused to initialize
    #[error("Windowing subsystem initialization failed: {0}")]
    InitializationFailed(String),

    /// The windowing subsystem is already live in this process
    #[error("Windowing subsystem is already initialized")]
    AlreadyInitialized,

    /// An operation needed the subsystem but it has not been initialized
    #[error("Windowing subsystem is not initialized")]
    NotInitialized,

    /// The native window could not be created
    #[error("Window creation failed")]
    CreationFailed,

    /// The windowing library cannot report Vulkan instance extensions
    #[error("Failed to get required instance extensions: {0}")]
    ExtensionsUnavailable(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;
