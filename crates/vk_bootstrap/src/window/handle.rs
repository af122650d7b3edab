//! Scoped windowing subsystem and move-only window handles

use super::{WindowBackend, WindowHint, WindowResult};
use crate::config::WindowConfig;
use crate::vulkan::ExtensionList;

/// Live windowing subsystem
///
/// Exists only between a successful [`WindowBackend::init`] and the matching
/// terminate. [`WindowSubsystem::shutdown`] consumes the subsystem; if it is
/// dropped without shutdown (startup failure, unwinding) the drop terminates
/// the backend instead, so termination happens exactly once either way.
pub struct WindowSubsystem<B: WindowBackend> {
    backend: B,
    active: bool,
}

impl<B: WindowBackend> WindowSubsystem<B> {
    /// Initialize the windowing library behind `backend`
    pub fn init(mut backend: B) -> WindowResult<Self> {
        backend.init()?;
        log::debug!("Windowing subsystem initialized");
        Ok(Self { backend, active: true })
    }

    /// Open a non-resizable window with no client API context
    pub fn create_window(&mut self, width: u32, height: u32, title: &str) -> WindowResult<WindowHandle<B::Window>> {
        self.backend.window_hint(WindowHint::NoClientApi);
        self.backend.window_hint(WindowHint::Resizable(false));

        let window = self.backend.create_window(width, height, title)?;
        log::debug!("Created window \"{title}\" ({width}x{height})");

        Ok(WindowHandle {
            window: Some(window),
            width,
            height,
            title: title.to_string(),
        })
    }

    /// Destroy a window; the handle is consumed so it cannot be reused
    pub fn destroy_window(&mut self, mut handle: WindowHandle<B::Window>) {
        if let Some(window) = handle.window.take() {
            log::debug!("Destroying window \"{}\"", handle.title);
            self.backend.destroy_window(window);
        }
    }

    /// Drain pending events for `handle`
    pub fn poll_events(&mut self, handle: &mut WindowHandle<B::Window>) {
        if let Some(window) = handle.window.as_mut() {
            self.backend.poll_events(window);
        }
    }

    /// Whether a close has been requested for `handle`
    pub fn close_requested(&self, handle: &WindowHandle<B::Window>) -> bool {
        handle.window.as_ref().map_or(true, |window| self.backend.should_close(window))
    }

    /// Instance extensions the windowing system requires, in the order it reports them
    pub fn required_extensions(&self) -> WindowResult<ExtensionList> {
        let extensions = self.backend.required_instance_extensions()?;
        log::debug!("Window system requires instance extensions: {extensions:?}");
        Ok(ExtensionList::from(extensions))
    }

    /// Terminate the windowing library
    pub fn shutdown(mut self) {
        self.terminate();
    }

    fn terminate(&mut self) {
        if self.active {
            self.active = false;
            self.backend.terminate();
            log::debug!("Windowing subsystem terminated");
        }
    }
}

impl<B: WindowBackend> Drop for WindowSubsystem<B> {
    fn drop(&mut self) {
        self.terminate();
    }
}

/// Exclusive ownership of one native window
///
/// Not `Clone`; the only way to release it is
/// [`WindowSubsystem::destroy_window`]. Dropping it unreleased logs a warning.
#[must_use = "a window must be released with `WindowSubsystem::destroy_window`"]
pub struct WindowHandle<W> {
    window: Option<W>,
    width: u32,
    height: u32,
    title: String,
}

impl<W> WindowHandle<W> {
    /// Width the window was created with
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height the window was created with
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Title the window was created with
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl<W> Drop for WindowHandle<W> {
    fn drop(&mut self) {
        if self.window.is_some() {
            log::warn!("Window \"{}\" dropped without destroy_window", self.title);
        }
    }
}

/// Initialize the windowing subsystem and open the application window
///
/// On failure nothing is left behind: a subsystem whose window could not be
/// created is terminated before the error is returned.
pub fn acquire_window<B: WindowBackend>(
    backend: B,
    config: &WindowConfig,
) -> WindowResult<(WindowSubsystem<B>, WindowHandle<B::Window>)> {
    let mut subsystem = WindowSubsystem::init(backend)?;
    let window = subsystem.create_window(config.width, config.height, &config.title)?;
    Ok((subsystem, window))
}
