//! # Bootstrap Configuration
//!
//! Window, application identity and validation settings for one run of the
//! sequencer. Every struct is `#[serde(default)]` so configuration files only
//! need to name what they change.

use ash::vk;
use serde::{Deserialize, Serialize};

use super::Config;

/// Validation layers requested when validation is enabled and no override is configured
pub const DEFAULT_VALIDATION_LAYERS: &[&str] = &["VK_LAYER_KHRONOS_validation"];

/// Top-level configuration consumed by [`crate::Bootstrap`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Window to open
    pub window: WindowConfig,
    /// Identity reported to the Vulkan driver
    pub application: ApplicationDescriptor,
    /// Diagnostic layer negotiation
    pub validation: ValidationConfig,
}

impl Config for BootstrapConfig {}

/// Window configuration
///
/// The window is always created non-resizable and without a client API
/// context; neither is configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in screen coordinates
    pub width: u32,
    /// Window height in screen coordinates
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vulkan".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// A `major.minor.patch` version triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version
    pub patch: u32,
}

impl Version {
    /// Create a version triple
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Pack into Vulkan's 32-bit version encoding (variant 0)
    pub const fn to_vk(self) -> u32 {
        vk::make_api_version(0, self.major, self.minor, self.patch)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Application identity passed to instance creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationDescriptor {
    /// Application name
    pub application_name: String,
    /// Application version
    pub application_version: Version,
    /// Engine name
    pub engine_name: String,
    /// Engine version
    pub engine_version: Version,
    /// Highest Vulkan API version the application targets
    pub api_version: Version,
}

impl Default for ApplicationDescriptor {
    fn default() -> Self {
        Self {
            application_name: "Hello Triangle".to_string(),
            application_version: Version::new(1, 0, 0),
            engine_name: "No Engine".to_string(),
            engine_version: Version::new(1, 0, 0),
            api_version: Version::new(1, 0, 0),
        }
    }
}

/// Validation layer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Request diagnostic layers at all (defaults to debug builds only)
    ///
    /// Ignored in release builds; see [`ValidationConfig::layers_active`].
    pub enabled: bool,
    /// Layer names to request; every one must be available
    pub layers: Vec<String>,
    /// Install a `VK_EXT_debug_utils` messenger that routes validation output into `log`
    pub debug_messenger: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            layers: DEFAULT_VALIDATION_LAYERS.iter().map(ToString::to_string).collect(),
            debug_messenger: false,
        }
    }
}

impl ValidationConfig {
    /// Whether layers are negotiated and enabled for this build
    ///
    /// Release builds never enable layers, whatever the config file says.
    pub const fn layers_active(&self) -> bool {
        cfg!(debug_assertions) && self.enabled
    }
}
