//! Opens a Vulkan-ready window and keeps it up until it is closed.
//!
//! Usage: `hello_window [config.toml|config.ron]`

use std::process::ExitCode;

use vk_bootstrap::foundation::logging;
use vk_bootstrap::prelude::*;

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(report) => {
            log::info!(
                "Clean shutdown: {} iteration(s), {} extension(s), {} layer(s)",
                report.iterations,
                report.extension_count,
                report.layer_count
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<RunReport, BootstrapError> {
    let config = match std::env::args().nth(1) {
        Some(path) => BootstrapConfig::load_from_file(path)?,
        None => BootstrapConfig::default(),
    };

    let api = AshApi::load()?;
    let mut bootstrap = Bootstrap::new(config, GlfwBackend::new(), api);
    bootstrap.run()
}
