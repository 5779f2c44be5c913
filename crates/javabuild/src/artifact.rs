use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;

/// A file artifact known to the build graph, identified by its exec-root-relative path.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Artifact {
    path: Utf8PathBuf,
}

impl core::fmt::Display for Artifact {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl Artifact {
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Ordered, duplicate-free aggregate of artifacts. The first occurrence of an
/// artifact fixes its position; later insertions of the same artifact are dropped.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ArtifactSet {
    artifacts: IndexSet<Artifact>,
}

impl ArtifactSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, artifact: Artifact) -> bool {
        self.artifacts.insert(artifact)
    }

    #[must_use]
    pub fn contains(&self, artifact: &Artifact) -> bool {
        self.artifacts.contains(artifact)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> indexmap::set::Iter<'_, Artifact> {
        self.artifacts.iter()
    }
}

impl FromIterator<Artifact> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        Self {
            artifacts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = indexmap::set::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

/// An executable tool together with the runfiles it needs when invoked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilesToRun {
    executable: Artifact,
    runfiles: ArtifactSet,
}

impl FilesToRun {
    #[must_use]
    pub fn new(executable: Artifact, runfiles: ArtifactSet) -> Self {
        Self { executable, runfiles }
    }

    #[must_use]
    pub fn executable(&self) -> &Artifact {
        &self.executable
    }

    #[must_use]
    pub fn runfiles(&self) -> &ArtifactSet {
        &self.runfiles
    }
}
