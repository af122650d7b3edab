//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Honours `RUST_LOG`; without it only warnings and errors are printed, so a
/// clean run produces no output.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
