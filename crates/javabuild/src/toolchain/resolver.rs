use std::sync::Arc;

use crate::{
    AnalysisTarget,
    Capability,
    CapabilityId,
    DiagnosticsSink,
    Prerequisite,
    ToolchainConfig,
    ToolchainInfo,
};

const TOOLCHAIN_MISMATCH: &str = "the selected toolchain is not a Java toolchain provider";

/// Resolves the Java toolchain configuration from a target's attribute
/// edges. Stateless; resolution is a pure function over the already
/// materialized graph, so repeating it yields the same result.
pub struct ToolchainResolver;

impl ToolchainResolver {
    /// Attribute edge consulted when no explicit attribute name is given.
    pub const DEFAULT_ATTRIBUTE: &str = ":java_toolchain";

    /// Resolves the toolchain reachable via `attribute`.
    ///
    /// A prerequisite that does not export a Java toolchain records exactly
    /// one rule error on `diagnostics` and resolves to `None`, so analysis
    /// continues and accumulates further errors. An undeclared attribute
    /// resolves to `None` silently; declaring the edge is the graph
    /// engine's contract.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(target, diagnostics)))]
    pub fn resolve(
        target: &dyn AnalysisTarget,
        attribute: &str,
        diagnostics: &mut DiagnosticsSink,
    ) -> Option<Arc<ToolchainConfig>> {
        let prerequisite = target.prerequisite(attribute)?;
        let resolved = Self::probe(prerequisite);
        if resolved.is_none() {
            diagnostics.rule_error(TOOLCHAIN_MISMATCH);
        }
        resolved
    }

    /// [`Self::resolve`] against [`Self::DEFAULT_ATTRIBUTE`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(target, diagnostics)))]
    pub fn resolve_default(
        target: &dyn AnalysisTarget,
        diagnostics: &mut DiagnosticsSink,
    ) -> Option<Arc<ToolchainConfig>> {
        Self::resolve(target, Self::DEFAULT_ATTRIBUTE, diagnostics)
    }

    /// Silent variant of [`Self::resolve`]: absent on mismatch, zero
    /// diagnostics. Absence is the caller's signal to fall back or skip.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(prerequisite)))]
    #[must_use]
    pub fn probe(prerequisite: &dyn Prerequisite) -> Option<Arc<ToolchainConfig>> {
        match prerequisite.capabilities().get(CapabilityId::Toolchain) {
            Some(Capability::Toolchain(ToolchainInfo::Java(config))) => Some(Arc::clone(config)),
            Some(Capability::Toolchain(ToolchainInfo::Opaque { .. }) | Capability::Files(_)) | None => None,
        }
    }
}
