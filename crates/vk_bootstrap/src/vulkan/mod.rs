//! Vulkan instance negotiation and construction
//!
//! Organized into the API seam ([`GraphicsApi`] / [`AshApi`]), layer
//! negotiation, and context construction.

use ash::vk;
use thiserror::Error;

mod api;
mod context;
mod debug;
mod layers;

pub use api::{AshApi, AshContext, GraphicsApi};
pub use context::{
    create_graphics_context, create_graphics_context_with, ContextCreateInfo, ExtensionList,
    GraphicsContextHandle, DEBUG_UTILS_EXTENSION,
};
pub use debug::DebugMessenger;
pub use layers::{
    all_layers_available, missing_layers, negotiate_layers, query_layer_availability,
    LayerAvailabilitySet, LayerRequestList, NegotiatedLayers,
};

/// Vulkan-specific error types
#[derive(Error, Debug)]
pub enum VulkanError {
    /// Vulkan API call returned a non-success result
    #[error("Vulkan API error: {0:?}")]
    Api(vk::Result),

    /// The Vulkan loader library could not be found or loaded
    #[error("Failed to load Vulkan: {0}")]
    Loader(String),

    /// The instance was created but its debug messenger could not be installed
    #[error("Failed to install debug messenger: {0:?}")]
    DebugMessenger(vk::Result),

    /// Enumerating instance layers failed
    #[error("Failed to enumerate instance layers: {0:?}")]
    LayerQuery(vk::Result),

    /// A name contains an interior NUL and cannot be passed to Vulkan
    #[error("Invalid name for Vulkan: {0:?}")]
    InvalidName(String),
}

/// Result type for Vulkan operations
pub type VulkanResult<T> = Result<T, VulkanError>;
