#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

use snafu::prelude::*;

pub use crate::{
    artifact::{Artifact, ArtifactSet, FilesToRun},
    capability::{Capability, CapabilityId, CapabilityRegistry, ToolchainInfo},
    diagnostics::{Diagnostic, DiagnosticsSink},
    graph::{AnalysisTarget, Prerequisite},
    label::Label,
    toolchain::{
        config::ToolchainConfig,
        declaration::ToolchainDeclaration,
        resolver::ToolchainResolver,
        ToolKind,
        ToolchainTools,
    },
};

pub mod artifact;
pub mod capability;
pub mod diagnostics;
pub mod graph;
pub mod label;
pub mod toolchain;

#[cfg(feature = "debug")]
pub trait JavabuildTracingDebug: core::fmt::Debug {}
#[cfg(feature = "debug")]
impl<A> JavabuildTracingDebug for A where A: core::fmt::Debug
{
}

#[cfg(not(feature = "debug"))]
pub trait JavabuildTracingDebug {}
#[cfg(not(feature = "debug"))]
impl<A> JavabuildTracingDebug for A {
}

#[derive(Debug, Snafu)]
pub enum Error {
    JavabuildToolchain { source: crate::toolchain::Error },
}
