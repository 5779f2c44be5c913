/// Raw toolchain declaration as parsed from the rule's attributes, before
/// any merging with build-wide configuration.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Default)]
pub struct ToolchainDeclaration {
    /// Input Java language level, e.g. `"8"`.
    pub source_version: String,
    /// Target Java language level.
    pub target_version: String,
    /// Source file encoding, e.g. `"UTF-8"`.
    pub encoding: String,
    /// Tool-native compiler flags, in declared order.
    pub options: Vec<String>,
    /// Flags for the JVM running the compiler and associated tools.
    pub jvm_options: Vec<String>,
    /// Whether the builder supports running as a persistent worker.
    pub supports_workers: bool,
}
