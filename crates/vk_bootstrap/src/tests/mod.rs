//! Crate-level tests
//!
//! In-memory collaborators and end-to-end sequencer scenarios.

pub(crate) mod mocks;
