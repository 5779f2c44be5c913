use snafu::prelude::*;

use crate::{Artifact, ArtifactSet, FilesToRun, Label};

pub mod config;
pub mod declaration;
pub mod resolver;

#[derive(Debug, Snafu)]
pub enum Error {
    ToolchainMissingTool { label: Label, tool: ToolKind },
}

impl From<self::Error> for crate::Error {
    fn from(source: self::Error) -> Self {
        crate::Error::JavabuildToolchain { source }
    }
}

/// Tool slots a toolchain cannot be constructed without.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ToolKind {
    Compiler,
    Builder,
    SingleJar,
    GenClass,
    InterfaceJarTool,
}

impl core::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Compiler => write!(f, "compiler"),
            Self::Builder => write!(f, "builder"),
            Self::SingleJar => write!(f, "single_jar"),
            Self::GenClass => write!(f, "gen_class"),
            Self::InterfaceJarTool => write!(f, "interface_jar_tool"),
        }
    }
}

/// Tool artifacts gathered from the toolchain target's attributes. Attribute
/// parsing cannot promise presence, so every slot arrives optional; the
/// required slots are checked by [`config::ToolchainConfig::new`].
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone, Default)]
pub struct ToolchainTools {
    pub compiler: Option<Artifact>,
    pub builder: Option<FilesToRun>,
    pub single_jar: Option<Artifact>,
    pub gen_class: Option<Artifact>,
    pub interface_jar_tool: Option<FilesToRun>,
    pub header_compiler: Option<Artifact>,
    pub one_version: Option<Artifact>,
    pub one_version_whitelist: Option<Artifact>,
    pub resource_jar_builder: Option<Artifact>,
    pub timezone_data: Option<Artifact>,
    pub tools: ArtifactSet,
    pub forcibly_disable_header_compilation: bool,
}
