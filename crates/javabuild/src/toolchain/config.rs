use indexmap::IndexMap;
use snafu::prelude::*;
use std::sync::Arc;

use crate::{
    toolchain::{Error, ToolKind, ToolchainMissingToolSnafu, ToolchainTools},
    Artifact,
    ArtifactSet,
    FilesToRun,
    Label,
    ToolchainDeclaration,
};

/// Immutable description of how to invoke the Java compiler and its
/// auxiliary tools for one build target. Constructed exactly once while the
/// owning target is analysed, then shared read-only; every accessor is a
/// pure projection.
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone)]
pub struct ToolchainConfig {
    label: Label,
    source_version: String,
    target_version: String,
    encoding: String,
    bootclasspath: ArtifactSet,
    extclasspath: ArtifactSet,
    compiler: Artifact,
    tools: ArtifactSet,
    builder: FilesToRun,
    header_compiler: Option<Artifact>,
    forcibly_disable_header_compilation: bool,
    single_jar: Artifact,
    one_version: Option<Artifact>,
    one_version_whitelist: Option<Artifact>,
    gen_class: Artifact,
    resource_jar_builder: Option<Artifact>,
    timezone_data: Option<Artifact>,
    interface_jar_tool: FilesToRun,
    compatible_options: IndexMap<String, Vec<String>>,
    default_options: Vec<String>,
    jvm_options: Vec<String>,
    supports_workers: bool,
}

impl ToolchainConfig {
    #[cfg_attr(feature = "tracing", tracing::instrument)]
    pub fn new(
        label: Label,
        declaration: ToolchainDeclaration,
        bootclasspath: ArtifactSet,
        extclasspath: ArtifactSet,
        global_options: Vec<String>,
        tools: ToolchainTools,
        compatible: impl IntoIterator<Item = (String, String)> + crate::JavabuildTracingDebug,
    ) -> Result<Self, Error> {
        let ToolchainTools {
            compiler,
            builder,
            single_jar,
            gen_class,
            interface_jar_tool,
            header_compiler,
            one_version,
            one_version_whitelist,
            resource_jar_builder,
            timezone_data,
            tools,
            forcibly_disable_header_compilation,
        } = tools;

        let compiler = compiler.context(ToolchainMissingToolSnafu {
            label: label.clone(),
            tool: ToolKind::Compiler,
        })?;
        let builder = builder.context(ToolchainMissingToolSnafu {
            label: label.clone(),
            tool: ToolKind::Builder,
        })?;
        let single_jar = single_jar.context(ToolchainMissingToolSnafu {
            label: label.clone(),
            tool: ToolKind::SingleJar,
        })?;
        let gen_class = gen_class.context(ToolchainMissingToolSnafu {
            label: label.clone(),
            tool: ToolKind::GenClass,
        })?;
        let interface_jar_tool = interface_jar_tool.context(ToolchainMissingToolSnafu {
            label: label.clone(),
            tool: ToolKind::InterfaceJarTool,
        })?;

        let ToolchainDeclaration {
            source_version,
            target_version,
            encoding,
            options,
            jvm_options,
            supports_workers,
        } = declaration;

        // Toolchain-native options precede build-wide options: the compiler
        // driver lets a later flag override an earlier one of the same name.
        let default_options = options.into_iter().chain(global_options).collect();

        let mut compatible_options = IndexMap::<String, Vec<String>>::new();
        for (environment, flag) in compatible {
            compatible_options.entry(environment).or_default().push(flag);
        }

        Ok(Self {
            label,
            source_version,
            target_version,
            encoding,
            bootclasspath,
            extclasspath,
            compiler,
            tools,
            builder,
            header_compiler,
            forcibly_disable_header_compilation,
            single_jar,
            one_version,
            one_version_whitelist,
            gen_class,
            resource_jar_builder,
            timezone_data,
            interface_jar_tool,
            compatible_options,
            default_options,
            jvm_options,
            supports_workers,
        })
    }

    /// [`Self::new`] behind a shared handle, the usual consumption shape:
    /// one construction, any number of concurrent readers.
    pub fn shared(
        label: Label,
        declaration: ToolchainDeclaration,
        bootclasspath: ArtifactSet,
        extclasspath: ArtifactSet,
        global_options: Vec<String>,
        tools: ToolchainTools,
        compatible: impl IntoIterator<Item = (String, String)> + crate::JavabuildTracingDebug,
    ) -> Result<Arc<Self>, Error> {
        Self::new(
            label,
            declaration,
            bootclasspath,
            extclasspath,
            global_options,
            tools,
            compatible,
        )
        .map(Arc::new)
    }

    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    #[must_use]
    pub fn source_version(&self) -> &str {
        &self.source_version
    }

    #[must_use]
    pub fn target_version(&self) -> &str {
        &self.target_version
    }

    #[must_use]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    #[must_use]
    pub fn bootclasspath(&self) -> &ArtifactSet {
        &self.bootclasspath
    }

    #[must_use]
    pub fn extclasspath(&self) -> &ArtifactSet {
        &self.extclasspath
    }

    #[must_use]
    pub fn compiler(&self) -> &Artifact {
        &self.compiler
    }

    /// Auxiliary compilation tools beyond the named slots.
    #[must_use]
    pub fn tools(&self) -> &ArtifactSet {
        &self.tools
    }

    #[must_use]
    pub fn builder(&self) -> &FilesToRun {
        &self.builder
    }

    #[must_use]
    pub fn header_compiler(&self) -> Option<&Artifact> {
        self.header_compiler.as_ref()
    }

    /// Whether header compilation is forcibly disabled for this toolchain,
    /// overriding the build-wide setting.
    #[must_use]
    pub fn forcibly_disable_header_compilation(&self) -> bool {
        self.forcibly_disable_header_compilation
    }

    #[must_use]
    pub fn single_jar(&self) -> &Artifact {
        &self.single_jar
    }

    #[must_use]
    pub fn one_version(&self) -> Option<&Artifact> {
        self.one_version.as_ref()
    }

    #[must_use]
    pub fn one_version_whitelist(&self) -> Option<&Artifact> {
        self.one_version_whitelist.as_ref()
    }

    #[must_use]
    pub fn gen_class(&self) -> &Artifact {
        &self.gen_class
    }

    #[must_use]
    pub fn resource_jar_builder(&self) -> Option<&Artifact> {
        self.resource_jar_builder.as_ref()
    }

    #[must_use]
    pub fn timezone_data(&self) -> Option<&Artifact> {
        self.timezone_data.as_ref()
    }

    #[must_use]
    pub fn interface_jar_tool(&self) -> &FilesToRun {
        &self.interface_jar_tool
    }

    /// Compiler flags for the given target environment. A key never supplied
    /// at construction yields an empty list.
    #[must_use]
    pub fn compatible_options(&self, environment: &str) -> &[String] {
        self.compatible_options
            .get(environment)
            .map_or(&[], Vec::as_slice)
    }

    /// Merged default compiler flags: the declaration's options in declared
    /// order, followed by the build-wide options in supplied order.
    #[must_use]
    pub fn default_options(&self) -> &[String] {
        &self.default_options
    }

    #[must_use]
    pub fn jvm_options(&self) -> &[String] {
        &self.jvm_options
    }

    #[must_use]
    pub fn supports_workers(&self) -> bool {
        self.supports_workers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn declaration() -> ToolchainDeclaration {
        ToolchainDeclaration {
            source_version: "8".into(),
            target_version: "8".into(),
            encoding: "UTF-8".into(),
            options: vec!["-Xfoo".into()],
            jvm_options: vec!["-Xmx512m".into()],
            supports_workers: true,
        }
    }

    fn tools() -> ToolchainTools {
        ToolchainTools {
            compiler: Some(Artifact::new("tools/javac.jar")),
            builder: Some(FilesToRun::new(Artifact::new("tools/builder"), ArtifactSet::new())),
            single_jar: Some(Artifact::new("tools/singlejar")),
            gen_class: Some(Artifact::new("tools/genclass.jar")),
            interface_jar_tool: Some(FilesToRun::new(Artifact::new("tools/ijar"), ArtifactSet::new())),
            ..ToolchainTools::default()
        }
    }

    fn config_with(
        global_options: Vec<String>,
        compatible: Vec<(String, String)>,
    ) -> ToolchainConfig {
        match ToolchainConfig::new(
            Label::new("//tools/jdk:toolchain"),
            declaration(),
            ArtifactSet::new(),
            ArtifactSet::new(),
            global_options,
            tools(),
            compatible,
        ) {
            Ok(config) => config,
            Err(error) => panic!("valid toolchain failed construction: {error}"),
        }
    }

    #[test]
    fn default_options_merge_native_before_global() {
        let config = config_with(vec!["-Xbar".into()], Vec::new());
        assert_eq!(config.default_options(), ["-Xfoo".to_owned(), "-Xbar".to_owned()]);
    }

    #[test]
    fn default_options_merge_keeps_duplicates() {
        let config = config_with(vec!["-Xfoo".into()], Vec::new());
        assert_eq!(config.default_options(), ["-Xfoo".to_owned(), "-Xfoo".to_owned()]);
    }

    #[test]
    fn compatible_options_group_per_environment_in_order() {
        let config = config_with(
            Vec::new(),
            vec![
                ("appengine".into(), "-XepDisableAll".into()),
                ("android".into(), "-Xdex".into()),
                ("appengine".into(), "-Xlint:none".into()),
            ],
        );
        assert_eq!(
            config.compatible_options("appengine"),
            ["-XepDisableAll".to_owned(), "-Xlint:none".to_owned()],
        );
        assert_eq!(config.compatible_options("android"), ["-Xdex".to_owned()]);
    }

    #[test]
    fn compatible_options_of_unknown_environment_are_empty() {
        let config = config_with(Vec::new(), Vec::new());
        assert!(config.compatible_options("appengine").is_empty());
    }

    #[test]
    fn construction_requires_every_required_tool() {
        let cases: Vec<(fn(&mut ToolchainTools), ToolKind)> = vec![
            (|tools| tools.compiler = None, ToolKind::Compiler),
            (|tools| tools.builder = None, ToolKind::Builder),
            (|tools| tools.single_jar = None, ToolKind::SingleJar),
            (|tools| tools.gen_class = None, ToolKind::GenClass),
            (|tools| tools.interface_jar_tool = None, ToolKind::InterfaceJarTool),
        ];
        for (strip, expected) in cases {
            let mut tools = tools();
            strip(&mut tools);
            match ToolchainConfig::new(
                Label::new("//tools/jdk:toolchain"),
                declaration(),
                ArtifactSet::new(),
                ArtifactSet::new(),
                Vec::new(),
                tools,
                Vec::new(),
            ) {
                Err(Error::ToolchainMissingTool { label, tool }) => {
                    assert_eq!(tool, expected);
                    assert_eq!(label, Label::new("//tools/jdk:toolchain"));
                },
                Ok(_) => panic!("constructed without required tool {expected}"),
            }
        }
    }

    #[test]
    fn optional_tools_may_be_absent_independently() {
        let config = config_with(Vec::new(), Vec::new());
        assert!(config.header_compiler().is_none());
        assert!(config.one_version().is_none());
        assert!(config.one_version_whitelist().is_none());
        assert!(config.resource_jar_builder().is_none());
        assert!(config.timezone_data().is_none());
    }

    #[test]
    fn optional_tools_are_exposed_when_present() {
        let tools = ToolchainTools {
            header_compiler: Some(Artifact::new("tools/turbine.jar")),
            timezone_data: Some(Artifact::new("tools/tzdata.jar")),
            forcibly_disable_header_compilation: true,
            ..tools()
        };
        let config = ToolchainConfig::new(
            Label::new("//tools/jdk:toolchain"),
            declaration(),
            ArtifactSet::new(),
            ArtifactSet::new(),
            Vec::new(),
            tools,
            Vec::new(),
        )
        .unwrap_or_else(|error| panic!("valid toolchain failed construction: {error}"));
        assert_eq!(config.header_compiler(), Some(&Artifact::new("tools/turbine.jar")));
        assert_eq!(config.timezone_data(), Some(&Artifact::new("tools/tzdata.jar")));
        assert!(config.forcibly_disable_header_compilation());
    }

    #[test]
    fn declaration_fields_project_unchanged() {
        let config = config_with(Vec::new(), Vec::new());
        assert_eq!(config.label(), &Label::new("//tools/jdk:toolchain"));
        assert_eq!(config.source_version(), "8");
        assert_eq!(config.target_version(), "8");
        assert_eq!(config.encoding(), "UTF-8");
        assert_eq!(config.jvm_options(), ["-Xmx512m".to_owned()]);
        assert!(config.supports_workers());
    }

    #[test]
    fn classpaths_keep_order_and_identity() {
        let bootclasspath = [Artifact::new("jdk/rt.jar"), Artifact::new("jdk/charsets.jar")]
            .into_iter()
            .collect::<ArtifactSet>();
        let config = ToolchainConfig::new(
            Label::new("//tools/jdk:toolchain"),
            declaration(),
            bootclasspath.clone(),
            ArtifactSet::new(),
            Vec::new(),
            tools(),
            Vec::new(),
        )
        .unwrap_or_else(|error| panic!("valid toolchain failed construction: {error}"));
        assert_eq!(config.bootclasspath(), &bootclasspath);
        assert!(config.extclasspath().is_empty());
    }

    #[test]
    fn accessors_are_stable_across_calls() {
        let config = config_with(vec!["-Xbar".into()], vec![("android".into(), "-Xdex".into())]);
        assert_eq!(config.default_options(), config.default_options());
        assert_eq!(config.compatible_options("android"), config.compatible_options("android"));
        assert_eq!(config.compatible_options("missing"), config.compatible_options("missing"));
        assert_eq!(config.compiler(), config.compiler());
    }
}
