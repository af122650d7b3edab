//! Validation layer negotiation
//!
//! Every requested layer must appear, byte for byte, in the set the installed
//! runtime reports. A single miss fails the whole negotiation; layers are never
//! dropped from the request to make it pass.

use super::GraphicsApi;
use crate::bootstrap::{BootstrapError, BootstrapResult};

/// Diagnostic layers the application wants enabled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerRequestList {
    names: Vec<String>,
}

impl LayerRequestList {
    /// Build a request list from layer names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Layers the installed Vulkan runtime supports, as reported right now
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerAvailabilitySet {
    names: Vec<String>,
}

impl LayerAvailabilitySet {
    /// Build an availability set from layer names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|available| available == name)
    }
}

/// Proof that every requested layer was found available
///
/// Only [`negotiate_layers`] creates this, so holding one means the check
/// passed for exactly these names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiatedLayers {
    names: Vec<String>,
}

impl NegotiatedLayers {
    /// Layer names to enable, in request order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Requested layers absent from `available`, in request order
pub fn missing_layers<'a>(requested: &'a LayerRequestList, available: &LayerAvailabilitySet) -> Vec<&'a str> {
    requested
        .names
        .iter()
        .filter(|name| !available.contains(name))
        .map(String::as_str)
        .collect()
}

/// Whether `requested` is a subset of `available`
pub fn all_layers_available(requested: &LayerRequestList, available: &LayerAvailabilitySet) -> bool {
    requested.names.iter().all(|name| available.contains(name))
}

/// Check `requested` against `available`
pub fn negotiate_layers(
    requested: &LayerRequestList,
    available: &LayerAvailabilitySet,
) -> BootstrapResult<NegotiatedLayers> {
    let missing = missing_layers(requested, available);
    if !missing.is_empty() {
        return Err(BootstrapError::ValidationLayersUnavailable {
            missing: missing.into_iter().map(ToString::to_string).collect(),
        });
    }

    log::debug!("Validation layers available: {:?}", requested.names);
    Ok(NegotiatedLayers {
        names: requested.names.clone(),
    })
}

/// Ask the runtime which layers it supports
pub fn query_layer_availability<G: GraphicsApi>(api: &G) -> BootstrapResult<LayerAvailabilitySet> {
    let names = api.enumerate_layers()?;
    log::debug!("Runtime reports {} instance layer(s)", names.len());
    Ok(LayerAvailabilitySet::new(names))
}
