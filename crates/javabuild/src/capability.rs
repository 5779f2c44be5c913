use indexmap::IndexMap;
use std::sync::Arc;

use crate::{ArtifactSet, Label, ToolchainConfig};

/// Well-known identifier under which a capability is registered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CapabilityId {
    Toolchain,
    Files,
}

impl core::fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Toolchain => write!(f, "toolchain"),
            Self::Files => write!(f, "files"),
        }
    }
}

/// A typed facet a prerequisite exports to dependents that need a specific
/// interface. The set of capabilities is closed; consumers dispatch by
/// matching on the variants rather than inspecting types at runtime.
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone)]
pub enum Capability {
    Toolchain(ToolchainInfo),
    Files(ArtifactSet),
}

impl Capability {
    #[must_use]
    pub fn id(&self) -> CapabilityId {
        match self {
            Self::Toolchain(_) => CapabilityId::Toolchain,
            Self::Files(_) => CapabilityId::Files,
        }
    }
}

/// The toolchain capability. Java analysis only consumes the `Java` kind;
/// toolchains of other languages stay opaque behind their label.
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone)]
pub enum ToolchainInfo {
    Java(Arc<ToolchainConfig>),
    Opaque { label: Label },
}

impl ToolchainInfo {
    #[must_use]
    pub fn label(&self) -> &Label {
        match self {
            Self::Java(config) => config.label(),
            Self::Opaque { label } => label,
        }
    }
}

/// Capabilities a prerequisite exports, keyed by well-known identifier.
/// One entry per identifier; registration keys by the capability's own id.
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone, Default)]
pub struct CapabilityRegistry {
    entries: IndexMap<CapabilityId, Capability>,
}

impl CapabilityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the capability, displacing any previous entry for its id.
    pub fn register(&mut self, capability: Capability) -> Option<Capability> {
        self.entries.insert(capability.id(), capability)
    }

    #[must_use]
    pub fn get(&self, id: CapabilityId) -> Option<&Capability> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CapabilityId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
