//! Bootstrap sequencer
//!
//! Drives window acquisition, capability negotiation, context construction,
//! the event loop and teardown, strictly in that order:
//!
//! ```text
//! Uninitialized -> WindowReady -> ContextReady -> Running -> Terminated
//!        \______________\_____________\
//!                                       -> FailedStartup
//! ```
//!
//! Teardown releases the graphics context, then the window, then the
//! windowing subsystem. A startup failure releases whatever was already
//! acquired in the same order before the error is returned.

use ash::vk;
use thiserror::Error;

use crate::config::{BootstrapConfig, ConfigError};
use crate::vulkan::{
    create_graphics_context_with, negotiate_layers, query_layer_availability, ContextCreateInfo, GraphicsApi,
    GraphicsContextHandle, LayerRequestList, VulkanError,
};
use crate::window::{acquire_window, WindowBackend, WindowError, WindowHandle, WindowSubsystem};

/// Startup and shutdown errors
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Windowing subsystem or window creation failed
    #[error("Initialization failed: {0}")]
    Initialization(#[from] WindowError),

    /// One or more requested validation layers are not installed
    #[error("Validation layers requested, but not available: {}", format_missing(.missing))]
    ValidationLayersUnavailable {
        /// Requested layer names the runtime does not report
        missing: Vec<String>,
    },

    /// The Vulkan driver rejected instance creation
    #[error("Failed to create Vulkan instance: {0:?}")]
    ContextCreation(vk::Result),

    /// Vulkan loader or query failure outside instance creation
    #[error(transparent)]
    Vulkan(#[from] VulkanError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn format_missing(missing: &[String]) -> String {
    if missing.is_empty() {
        "layer negotiation did not run".to_string()
    } else {
        missing.join(", ")
    }
}

/// Result type for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Sequencer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Nothing acquired yet
    Uninitialized,
    /// Windowing subsystem initialized and window open
    WindowReady,
    /// Graphics context constructed
    ContextReady,
    /// Event loop running
    Running,
    /// Clean shutdown finished
    Terminated,
    /// A startup stage failed; the loop never ran
    FailedStartup,
}

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Event loop iterations executed
    pub iterations: u64,
    /// Extensions the context was created with
    pub extension_count: u32,
    /// Layers the context was created with
    pub layer_count: u32,
}

/// The bootstrap sequencer
///
/// Owns the windowing backend until [`Bootstrap::run`] consumes it, so a
/// sequencer runs at most once.
pub struct Bootstrap<B: WindowBackend, G: GraphicsApi> {
    config: BootstrapConfig,
    backend: Option<B>,
    api: G,
    state: SequencerState,
}

impl<B: WindowBackend, G: GraphicsApi> Bootstrap<B, G> {
    /// Create a sequencer over the given collaborators
    pub fn new(config: BootstrapConfig, backend: B, api: G) -> Self {
        Self {
            config,
            backend: Some(backend),
            api,
            state: SequencerState::Uninitialized,
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SequencerState {
        self.state
    }

    /// Acquire, negotiate, construct, loop until close, tear down
    pub fn run(&mut self) -> BootstrapResult<RunReport> {
        let backend = self.backend.take().ok_or(WindowError::AlreadyInitialized)?;

        log::info!("Starting bootstrap sequence");
        let (mut subsystem, mut window) = match acquire_window(backend, &self.config.window) {
            Ok(acquired) => acquired,
            Err(e) => return Err(self.fail(e.into())),
        };
        self.transition(SequencerState::WindowReady);

        let context = match self.construct_context(&subsystem) {
            Ok(context) => context,
            Err(e) => {
                subsystem.destroy_window(window);
                subsystem.shutdown();
                return Err(self.fail(e));
            }
        };
        self.transition(SequencerState::ContextReady);

        let report = RunReport {
            iterations: 0,
            extension_count: context.extension_count(),
            layer_count: context.layer_count(),
        };

        self.transition(SequencerState::Running);
        let iterations = run_loop(&mut subsystem, &mut window);

        teardown(&self.api, context, subsystem, window);
        self.transition(SequencerState::Terminated);

        log::info!("Bootstrap sequence finished after {iterations} iteration(s)");
        Ok(RunReport { iterations, ..report })
    }

    fn construct_context(&self, subsystem: &WindowSubsystem<B>) -> BootstrapResult<GraphicsContextHandle<G::Context>> {
        let extensions = subsystem.required_extensions()?;
        let validation = &self.config.validation;
        let enable_layers = validation.layers_active();

        let negotiated = if enable_layers {
            let requested = LayerRequestList::new(validation.layers.iter().cloned());
            let available = query_layer_availability(&self.api)?;
            Some(negotiate_layers(&requested, &available)?)
        } else {
            log::debug!("Validation inactive for this build; skipping layer negotiation");
            None
        };

        let info = ContextCreateInfo::new(&self.config.application, &extensions, enable_layers, negotiated.as_ref())?
            .with_debug_messenger(validation.debug_messenger);
        create_graphics_context_with(&self.api, &info)
    }

    fn transition(&mut self, next: SequencerState) {
        log::debug!("Sequencer state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn fail(&mut self, error: BootstrapError) -> BootstrapError {
        log::debug!("Startup failed in state {:?}: {}", self.state, error);
        self.transition(SequencerState::FailedStartup);
        error
    }
}

/// Poll until the window reports a close request; returns the iteration count
///
/// Events are drained before the flag is read, so a close requested during
/// the first poll ends the loop after exactly one iteration.
pub fn run_loop<B: WindowBackend>(subsystem: &mut WindowSubsystem<B>, window: &mut WindowHandle<B::Window>) -> u64 {
    let mut iterations = 0;
    loop {
        subsystem.poll_events(window);
        iterations += 1;
        if subsystem.close_requested(window) {
            return iterations;
        }
    }
}

/// Release in reverse acquisition order: context, window, subsystem
pub fn teardown<B: WindowBackend, G: GraphicsApi>(
    api: &G,
    context: GraphicsContextHandle<G::Context>,
    mut subsystem: WindowSubsystem<B>,
    window: WindowHandle<B::Window>,
) {
    context.destroy(api);
    subsystem.destroy_window(window);
    subsystem.shutdown();
}
