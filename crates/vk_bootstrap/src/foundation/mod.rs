//! Foundation module - shared utilities
//!
//! - Logging setup

pub mod logging;
