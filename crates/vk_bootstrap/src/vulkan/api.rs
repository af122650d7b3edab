//! Graphics API seam
//!
//! [`GraphicsApi`] is what the sequencer needs from Vulkan: the layer list,
//! one instance creation and its destruction. [`AshApi`] implements it on top
//! of the system Vulkan loader.

use std::ffi::{c_char, CStr, CString};

use ash::{vk, Entry, Instance};

use super::{ContextCreateInfo, DebugMessenger, VulkanError, VulkanResult};

/// Graphics API collaborator used by the bootstrap sequencer
pub trait GraphicsApi {
    /// Top-level context this API creates
    type Context;

    /// Names of the instance layers the runtime supports
    fn enumerate_layers(&self) -> VulkanResult<Vec<String>>;

    /// Create the top-level context; called once per run
    ///
    /// A rejected creation is reported as [`VulkanError::Api`] with the
    /// status code the API returned. Failures after the context exists use
    /// their own variants and must release what was already created.
    fn create_context(&self, info: &ContextCreateInfo) -> VulkanResult<Self::Context>;

    /// Destroy a context created by this API
    fn destroy_context(&self, context: Self::Context);
}

/// Vulkan through `ash`, loaded from the system loader
pub struct AshApi {
    entry: Entry,
}

impl AshApi {
    /// Load the Vulkan loader library
    pub fn load() -> VulkanResult<Self> {
        let entry = unsafe { Entry::load() }.map_err(|e| VulkanError::Loader(format!("{e:?}")))?;
        Ok(Self { entry })
    }
}

/// Vulkan instance plus its optional debug messenger
pub struct AshContext {
    instance: Instance,
    debug_messenger: Option<DebugMessenger>,
}

fn to_cstrings(names: &[String]) -> VulkanResult<Vec<CString>> {
    names.iter().map(|name| to_cstring(name)).collect()
}

fn to_cstring(name: &str) -> VulkanResult<CString> {
    CString::new(name).map_err(|_| VulkanError::InvalidName(name.to_string()))
}

impl GraphicsApi for AshApi {
    type Context = AshContext;

    fn enumerate_layers(&self) -> VulkanResult<Vec<String>> {
        let properties = self
            .entry
            .enumerate_instance_layer_properties()
            .map_err(VulkanError::LayerQuery)?;

        Ok(properties
            .iter()
            .map(|layer| {
                unsafe { CStr::from_ptr(layer.layer_name.as_ptr()) }
                    .to_string_lossy()
                    .into_owned()
            })
            .collect())
    }

    fn create_context(&self, info: &ContextCreateInfo) -> VulkanResult<AshContext> {
        let application = info.application();
        let app_name = to_cstring(&application.application_name)?;
        let engine_name = to_cstring(&application.engine_name)?;

        let extensions = to_cstrings(info.extensions())?;
        let layers = to_cstrings(info.layers())?;
        let extension_ptrs: Vec<*const c_char> = extensions.iter().map(|ext| ext.as_ptr()).collect();
        let layer_ptrs: Vec<*const c_char> = layers.iter().map(|layer| layer.as_ptr()).collect();

        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(application.application_version.to_vk())
            .engine_name(&engine_name)
            .engine_version(application.engine_version.to_vk())
            .api_version(application.api_version.to_vk());

        // Zero layers means an empty slice: count 0 and a null name pointer
        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs)
            .enabled_layer_names(&layer_ptrs);

        let instance = unsafe { self.entry.create_instance(&create_info, None) }.map_err(VulkanError::Api)?;

        let debug_messenger = if info.debug_messenger() {
            match DebugMessenger::new(&self.entry, &instance) {
                Ok(messenger) => Some(messenger),
                Err(e) => {
                    unsafe { instance.destroy_instance(None) };
                    return Err(e);
                }
            }
        } else {
            None
        };

        Ok(AshContext {
            instance,
            debug_messenger,
        })
    }

    fn destroy_context(&self, context: AshContext) {
        if let Some(messenger) = context.debug_messenger {
            messenger.destroy();
        }
        unsafe {
            context.instance.destroy_instance(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_nul_is_rejected() {
        let result = to_cstrings(&["VK_KHR_surface".to_string(), "bad\0name".to_string()]);
        assert!(matches!(result, Err(VulkanError::InvalidName(name)) if name == "bad\0name"));
    }

    #[test]
    fn test_names_convert_in_order() {
        let converted = to_cstrings(&["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(converted, vec![CString::new("A").unwrap(), CString::new("B").unwrap()]);
    }
}
