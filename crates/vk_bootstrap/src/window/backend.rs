//! Backend-agnostic windowing trait
//!
//! Everything the sequencer needs from a windowing library, and nothing
//! else. Implementations own whatever process-wide state the library has;
//! [`super::WindowSubsystem`] decides when it is initialized and terminated.

use super::WindowResult;

/// Window creation hints applied before [`WindowBackend::create_window`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHint {
    /// Do not create an OpenGL/GLES context; the graphics API is managed elsewhere
    NoClientApi,
    /// Whether the user may resize the window
    Resizable(bool),
}

/// Windowing collaborator used by the bootstrap sequencer
pub trait WindowBackend {
    /// Native window owned by this backend
    type Window;

    /// Initialize the windowing library
    ///
    /// Fails with [`super::WindowError::AlreadyInitialized`] when called again
    /// without an intervening [`WindowBackend::terminate`].
    fn init(&mut self) -> WindowResult<()>;

    /// Set a hint for the next window creation
    fn window_hint(&mut self, hint: WindowHint);

    /// Create a native window using the current hints
    fn create_window(&mut self, width: u32, height: u32, title: &str) -> WindowResult<Self::Window>;

    /// Destroy a native window
    fn destroy_window(&mut self, window: Self::Window);

    /// Drain pending window-system events without blocking
    fn poll_events(&mut self, window: &mut Self::Window);

    /// Whether the user (or the application) asked the window to close
    fn should_close(&self, window: &Self::Window) -> bool;

    /// Instance extensions the windowing library needs for surface interop
    fn required_instance_extensions(&self) -> WindowResult<Vec<String>>;

    /// Shut the windowing library down
    fn terminate(&mut self);
}
