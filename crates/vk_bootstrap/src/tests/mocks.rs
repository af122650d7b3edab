//! Journaling test doubles for the windowing and graphics collaborators
//!
//! Both mocks append every call to a shared [`Journal`], so tests can assert
//! on ordering across the two collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use ash::vk;

use crate::vulkan::{ContextCreateInfo, GraphicsApi, VulkanError, VulkanResult};
use crate::window::{WindowBackend, WindowError, WindowHint, WindowResult};

/// One observed collaborator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Init,
    Hint(WindowHint),
    CreateWindow { width: u32, height: u32, title: String },
    PollEvents,
    ShouldClose,
    RequiredExtensions,
    DestroyWindow,
    Terminate,
    EnumerateLayers,
    CreateContext(ContextCreateInfo),
    DestroyContext,
}

/// Shared, ordered call log
#[derive(Debug, Clone, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<Call>>>);

impl Journal {
    fn record(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub(crate) fn count(&self, call: &Call) -> usize {
        self.0.borrow().iter().filter(|c| *c == call).count()
    }

    /// Index of the first occurrence of `call`
    pub(crate) fn position(&self, call: &Call) -> Option<usize> {
        self.0.borrow().iter().position(|c| c == call)
    }

    pub(crate) fn contains(&self, call: &Call) -> bool {
        self.position(call).is_some()
    }

    /// Every request passed to `create_context`, in order
    pub(crate) fn created_contexts(&self) -> Vec<ContextCreateInfo> {
        self.0
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::CreateContext(info) => Some(info.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Window produced by [`MockWindowBackend`]; deliberately not `Clone`
#[derive(Debug)]
pub(crate) struct MockWindow;

pub(crate) struct MockWindowBackend {
    journal: Journal,
    fail_init: bool,
    fail_create: bool,
    fail_extensions: bool,
    extensions: Vec<String>,
    close_after_polls: u64,
    polls: u64,
}

impl MockWindowBackend {
    /// Closes on the first poll and requires the two usual surface extensions
    pub(crate) fn new(journal: Journal) -> Self {
        Self {
            journal,
            fail_init: false,
            fail_create: false,
            fail_extensions: false,
            extensions: vec!["VK_KHR_surface".to_string(), "VK_KHR_xlib_surface".to_string()],
            close_after_polls: 1,
            polls: 0,
        }
    }

    pub(crate) fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub(crate) fn failing_window_creation(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub(crate) fn failing_extension_query(mut self) -> Self {
        self.fail_extensions = true;
        self
    }

    pub(crate) fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(ToString::to_string).collect();
        self
    }

    pub(crate) fn closing_after(mut self, polls: u64) -> Self {
        self.close_after_polls = polls;
        self
    }
}

impl WindowBackend for MockWindowBackend {
    type Window = MockWindow;

    fn init(&mut self) -> WindowResult<()> {
        self.journal.record(Call::Init);
        if self.fail_init {
            return Err(WindowError::InitializationFailed("mock init failure".to_string()));
        }
        Ok(())
    }

    fn window_hint(&mut self, hint: WindowHint) {
        self.journal.record(Call::Hint(hint));
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> WindowResult<MockWindow> {
        self.journal.record(Call::CreateWindow {
            width,
            height,
            title: title.to_string(),
        });
        if self.fail_create {
            return Err(WindowError::CreationFailed);
        }
        Ok(MockWindow)
    }

    fn destroy_window(&mut self, _window: MockWindow) {
        self.journal.record(Call::DestroyWindow);
    }

    fn poll_events(&mut self, _window: &mut MockWindow) {
        self.polls += 1;
        self.journal.record(Call::PollEvents);
    }

    fn should_close(&self, _window: &MockWindow) -> bool {
        self.journal.record(Call::ShouldClose);
        self.polls >= self.close_after_polls
    }

    fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.journal.record(Call::RequiredExtensions);
        if self.fail_extensions {
            return Err(WindowError::ExtensionsUnavailable("mock extension failure".to_string()));
        }
        Ok(self.extensions.clone())
    }

    fn terminate(&mut self) {
        self.journal.record(Call::Terminate);
    }
}

/// Context produced by [`MockGraphicsApi`]; deliberately not `Clone`
#[derive(Debug)]
pub(crate) struct MockContext;

pub(crate) struct MockGraphicsApi {
    journal: Journal,
    available: Vec<String>,
    create_failure: Option<vk::Result>,
    enumerate_failure: Option<vk::Result>,
    messenger_failure: Option<vk::Result>,
}

impl MockGraphicsApi {
    /// Reports no layers and accepts every creation request
    pub(crate) fn new(journal: Journal) -> Self {
        Self {
            journal,
            available: Vec::new(),
            create_failure: None,
            enumerate_failure: None,
            messenger_failure: None,
        }
    }

    pub(crate) fn with_layers(mut self, layers: &[&str]) -> Self {
        self.available = layers.iter().map(ToString::to_string).collect();
        self
    }

    pub(crate) fn failing_creation(mut self, status: vk::Result) -> Self {
        self.create_failure = Some(status);
        self
    }

    /// Accepts the instance, then fails installing the debug messenger
    pub(crate) fn failing_debug_messenger(mut self, status: vk::Result) -> Self {
        self.messenger_failure = Some(status);
        self
    }

    pub(crate) fn failing_enumeration(mut self, status: vk::Result) -> Self {
        self.enumerate_failure = Some(status);
        self
    }
}

impl GraphicsApi for MockGraphicsApi {
    type Context = MockContext;

    fn enumerate_layers(&self) -> VulkanResult<Vec<String>> {
        self.journal.record(Call::EnumerateLayers);
        match self.enumerate_failure {
            Some(status) => Err(VulkanError::LayerQuery(status)),
            None => Ok(self.available.clone()),
        }
    }

    fn create_context(&self, info: &ContextCreateInfo) -> VulkanResult<MockContext> {
        self.journal.record(Call::CreateContext(info.clone()));
        if let Some(status) = self.create_failure {
            return Err(VulkanError::Api(status));
        }
        match self.messenger_failure {
            Some(status) if info.debug_messenger() => Err(VulkanError::DebugMessenger(status)),
            _ => Ok(MockContext),
        }
    }

    fn destroy_context(&self, _context: MockContext) {
        self.journal.record(Call::DestroyContext);
    }
}
