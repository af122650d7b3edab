//! GLFW window backend
//!
//! GLFW keeps process-wide state, so initialization is guarded by a static
//! flag: a second `init` without `terminate` is rejected rather than handed
//! to GLFW.

use std::sync::atomic::{AtomicBool, Ordering};

use super::{WindowBackend, WindowError, WindowHint, WindowResult};

static GLFW_ACTIVE: AtomicBool = AtomicBool::new(false);

/// GLFW implementation of [`WindowBackend`]
#[derive(Default)]
pub struct GlfwBackend {
    glfw: Option<glfw::Glfw>,
}

/// A GLFW window together with its event receiver
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwWindow {
    /// Borrow the underlying GLFW window
    pub const fn glfw_window(&self) -> &glfw::PWindow {
        &self.window
    }
}

impl GlfwBackend {
    /// Create an uninitialized backend
    pub const fn new() -> Self {
        Self { glfw: None }
    }

    fn glfw_mut(&mut self) -> WindowResult<&mut glfw::Glfw> {
        self.glfw.as_mut().ok_or(WindowError::NotInitialized)
    }
}

impl WindowBackend for GlfwBackend {
    type Window = GlfwWindow;

    fn init(&mut self) -> WindowResult<()> {
        if GLFW_ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(WindowError::AlreadyInitialized);
        }

        match glfw::init(glfw::log_errors) {
            Ok(glfw) => {
                self.glfw = Some(glfw);
                Ok(())
            }
            Err(e) => {
                GLFW_ACTIVE.store(false, Ordering::Release);
                Err(WindowError::InitializationFailed(format!("{e:?}")))
            }
        }
    }

    fn window_hint(&mut self, hint: WindowHint) {
        let Ok(glfw) = self.glfw_mut() else {
            log::warn!("Ignoring window hint {hint:?}: GLFW is not initialized");
            return;
        };

        match hint {
            WindowHint::NoClientApi => {
                glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
            }
            WindowHint::Resizable(resizable) => {
                glfw.window_hint(glfw::WindowHint::Resizable(resizable));
            }
        }
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> WindowResult<GlfwWindow> {
        let glfw = self.glfw_mut()?;

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_close_polling(true);
        window.set_key_polling(true);

        Ok(GlfwWindow { window, events })
    }

    fn destroy_window(&mut self, window: GlfwWindow) {
        // PWindow calls glfwDestroyWindow on drop
        drop(window);
    }

    fn poll_events(&mut self, window: &mut GlfwWindow) {
        if let Some(glfw) = self.glfw.as_mut() {
            glfw.poll_events();
        }

        for (_, event) in glfw::flush_messages(&window.events) {
            log::trace!("{event:?}");
        }
    }

    fn should_close(&self, window: &GlfwWindow) -> bool {
        window.window.should_close()
    }

    fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        let glfw = self.glfw.as_ref().ok_or(WindowError::NotInitialized)?;

        glfw.get_required_instance_extensions().ok_or_else(|| {
            WindowError::ExtensionsUnavailable("Vulkan is not supported by this GLFW build".to_string())
        })
    }

    fn terminate(&mut self) {
        // glfwTerminate runs once the last Glfw reference is dropped
        if self.glfw.take().is_some() {
            GLFW_ACTIVE.store(false, Ordering::Release);
        }
    }
}
