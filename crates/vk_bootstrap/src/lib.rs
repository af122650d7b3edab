//! # Vulkan Bootstrap
//!
//! Brings a Vulkan application from nothing to a running event loop and back:
//!
//! - **Window acquisition**: a non-resizable GLFW window with no client API
//! - **Capability negotiation**: window-required instance extensions and
//!   validation layer availability
//! - **Context construction**: the `VkInstance`, created exactly once
//! - **Run loop & teardown**: event polling until close, then release in
//!   reverse acquisition order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vk_bootstrap::prelude::*;
//!
//! fn main() -> Result<(), BootstrapError> {
//!     let api = AshApi::load()?;
//!     let mut bootstrap = Bootstrap::new(BootstrapConfig::default(), GlfwBackend::new(), api);
//!     bootstrap.run()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod vulkan;
pub mod window;

mod bootstrap;

#[cfg(test)]
mod tests;

pub use bootstrap::{run_loop, teardown, Bootstrap, BootstrapError, BootstrapResult, RunReport, SequencerState};
pub use config::{
    ApplicationDescriptor, BootstrapConfig, Config, ConfigError, ValidationConfig, Version,
    WindowConfig,
};

/// Common imports for bootstrap users
pub mod prelude {
    pub use crate::{
        Bootstrap, BootstrapError, BootstrapResult, RunReport, SequencerState,
        config::{ApplicationDescriptor, BootstrapConfig, Config, ValidationConfig, Version, WindowConfig},
        vulkan::{AshApi, GraphicsApi},
        window::{GlfwBackend, WindowBackend},
    };
}
