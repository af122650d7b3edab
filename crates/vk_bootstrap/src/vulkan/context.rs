//! Vulkan context construction
//!
//! Assembles the instance-creation request from the application descriptor,
//! the window-required extensions and (optionally) the negotiated layers, and
//! hands it to the [`GraphicsApi`] exactly once.

use super::{GraphicsApi, NegotiatedLayers, VulkanError};
use crate::bootstrap::{BootstrapError, BootstrapResult};
use crate::config::ApplicationDescriptor;

/// Extension needed for the validation debug messenger
pub const DEBUG_UTILS_EXTENSION: &str = "VK_EXT_debug_utils";

/// Instance extensions required by the windowing system, in reported order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionList {
    names: Vec<String>,
}

impl ExtensionList {
    /// Extension names
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl From<Vec<String>> for ExtensionList {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

/// Everything instance creation needs, independent of the Vulkan binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextCreateInfo {
    application: ApplicationDescriptor,
    extensions: Vec<String>,
    layers: Vec<String>,
    debug_messenger: bool,
}

impl ContextCreateInfo {
    /// Assemble a creation request
    ///
    /// With `enable_layers` false the layer list is empty whatever `negotiated`
    /// holds. With `enable_layers` true a passed negotiation is required.
    pub fn new(
        application: &ApplicationDescriptor,
        extensions: &ExtensionList,
        enable_layers: bool,
        negotiated: Option<&NegotiatedLayers>,
    ) -> BootstrapResult<Self> {
        let layers = if enable_layers {
            let negotiated = negotiated.ok_or_else(|| BootstrapError::ValidationLayersUnavailable {
                missing: Vec::new(),
            })?;
            negotiated.names().to_vec()
        } else {
            Vec::new()
        };

        Ok(Self {
            application: application.clone(),
            extensions: extensions.names().to_vec(),
            layers,
            debug_messenger: false,
        })
    }

    /// Request a debug messenger
    ///
    /// Only takes effect when layers are enabled; appends
    /// [`DEBUG_UTILS_EXTENSION`] after the window-required extensions.
    #[must_use]
    pub fn with_debug_messenger(mut self, enabled: bool) -> Self {
        if enabled && !self.layers.is_empty() && !self.debug_messenger {
            self.debug_messenger = true;
            if !self.extensions.iter().any(|ext| ext == DEBUG_UTILS_EXTENSION) {
                self.extensions.push(DEBUG_UTILS_EXTENSION.to_string());
            }
        }
        self
    }

    /// Application identity
    pub const fn application(&self) -> &ApplicationDescriptor {
        &self.application
    }

    /// Extensions to enable
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Layers to enable
    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    /// `enabledExtensionCount`
    pub fn extension_count(&self) -> u32 {
        u32::try_from(self.extensions.len()).unwrap_or(u32::MAX)
    }

    /// `enabledLayerCount`
    pub fn layer_count(&self) -> u32 {
        u32::try_from(self.layers.len()).unwrap_or(u32::MAX)
    }

    /// Whether a debug messenger should be installed
    pub const fn debug_messenger(&self) -> bool {
        self.debug_messenger
    }
}

/// Exclusive ownership of a constructed graphics context
///
/// Not `Clone`; released with [`GraphicsContextHandle::destroy`]. Dropping it
/// unreleased leaks the context and logs a warning.
#[must_use = "a graphics context must be released with `destroy`"]
pub struct GraphicsContextHandle<C> {
    context: Option<C>,
    extension_count: u32,
    layer_count: u32,
}

impl<C> GraphicsContextHandle<C> {
    /// Number of extensions the context was created with
    pub const fn extension_count(&self) -> u32 {
        self.extension_count
    }

    /// Number of layers the context was created with
    pub const fn layer_count(&self) -> u32 {
        self.layer_count
    }

    /// Destroy the context through the API that created it
    pub fn destroy<G: GraphicsApi<Context = C>>(mut self, api: &G) {
        if let Some(context) = self.context.take() {
            log::debug!("Destroying graphics context");
            api.destroy_context(context);
        }
    }
}

impl<C> Drop for GraphicsContextHandle<C> {
    fn drop(&mut self) {
        if self.context.is_some() {
            log::warn!("Graphics context dropped without destroy; it will leak");
        }
    }
}

/// Create the graphics context
///
/// Fails with [`BootstrapError::ValidationLayersUnavailable`] before touching
/// the API if `enable_layers` is set without a passed negotiation, and with
/// [`BootstrapError::ContextCreation`] only if the API rejects the request
/// itself. Later failures, such as the debug messenger, surface as
/// [`BootstrapError::Vulkan`].
pub fn create_graphics_context<G: GraphicsApi>(
    api: &G,
    application: &ApplicationDescriptor,
    extensions: &ExtensionList,
    enable_layers: bool,
    negotiated: Option<&NegotiatedLayers>,
) -> BootstrapResult<GraphicsContextHandle<G::Context>> {
    let info = ContextCreateInfo::new(application, extensions, enable_layers, negotiated)?;
    create_graphics_context_with(api, &info)
}

/// Create the graphics context from an assembled request
pub fn create_graphics_context_with<G: GraphicsApi>(
    api: &G,
    info: &ContextCreateInfo,
) -> BootstrapResult<GraphicsContextHandle<G::Context>> {
    log::debug!(
        "Creating graphics context for {} {} ({} extension(s), {} layer(s))",
        info.application.application_name,
        info.application.application_version,
        info.extension_count(),
        info.layer_count(),
    );

    let context = api.create_context(info).map_err(|e| match e {
        VulkanError::Api(code) => BootstrapError::ContextCreation(code),
        other => BootstrapError::Vulkan(other),
    })?;

    log::info!("Graphics context created");
    Ok(GraphicsContextHandle {
        context: Some(context),
        extension_count: info.extension_count(),
        layer_count: info.layer_count(),
    })
}
