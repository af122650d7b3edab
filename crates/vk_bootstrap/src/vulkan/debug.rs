//! Validation message forwarding
//!
//! A `VK_EXT_debug_utils` messenger whose callback writes every message into
//! the `log` facade at a level matching its severity.

use std::ffi::CStr;

use ash::extensions::ext::DebugUtils;
use ash::vk;

use super::{VulkanError, VulkanResult};

/// Installed debug messenger; destroy before the instance it belongs to
pub struct DebugMessenger {
    loader: DebugUtils,
    messenger: vk::DebugUtilsMessengerEXT,
}

impl DebugMessenger {
    /// Install a messenger on `instance`
    pub fn new(entry: &ash::Entry, instance: &ash::Instance) -> VulkanResult<Self> {
        let loader = DebugUtils::new(entry, instance);

        let create_info = vk::DebugUtilsMessengerCreateInfoEXT::builder()
            .message_severity(
                vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                    | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
                    | vk::DebugUtilsMessageSeverityFlagsEXT::INFO,
            )
            .message_type(
                vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                    | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                    | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
            )
            .pfn_user_callback(Some(debug_callback));

        let messenger = unsafe { loader.create_debug_utils_messenger(&create_info, None) }
            .map_err(VulkanError::DebugMessenger)?;

        log::debug!("Debug messenger installed");
        Ok(Self { loader, messenger })
    }

    /// Remove the messenger
    pub fn destroy(self) {
        unsafe {
            self.loader.destroy_debug_utils_messenger(self.messenger, None);
        }
    }
}

/// Log level for a validation message severity
fn severity_level(severity: vk::DebugUtilsMessageSeverityFlagsEXT) -> log::Level {
    if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::ERROR {
        log::Level::Error
    } else if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::WARNING {
        log::Level::Warn
    } else if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::INFO {
        log::Level::Debug
    } else {
        log::Level::Trace
    }
}

unsafe extern "system" fn debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _user_data: *mut std::ffi::c_void,
) -> vk::Bool32 {
    if callback_data.is_null() || (*callback_data).p_message.is_null() {
        return vk::FALSE;
    }
    let message = CStr::from_ptr((*callback_data).p_message).to_string_lossy();

    log::log!(severity_level(message_severity), "[Vulkan] {:?} - {}", message_type, message);

    vk::FALSE
}
