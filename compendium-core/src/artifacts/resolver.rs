use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::trace;

use super::ArtifactKind;

/// Fetches raw artifact content for a component.
///
/// `Ok(None)` means the artifact does not exist; errors are reserved for
/// failures while reading one that does.
pub trait ArtifactResolver: Send + Sync {
    fn resolve(
        &self,
        kind: ArtifactKind,
        component: &str,
        reference: &str,
    ) -> io::Result<Option<String>>;
}

/// Resolves references as paths relative to a root directory
#[derive(Debug, Clone)]
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join `reference` onto the root, refusing anything that would leave it
    fn artifact_path(&self, reference: &str) -> io::Result<PathBuf> {
        let relative = Path::new(reference);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("artifact reference must stay inside {}", self.root.display()),
            ));
        }

        Ok(self.root.join(relative))
    }
}

impl ArtifactResolver for FsResolver {
    fn resolve(
        &self,
        kind: ArtifactKind,
        component: &str,
        reference: &str,
    ) -> io::Result<Option<String>> {
        let path = self.artifact_path(reference)?;
        trace!(component, %kind, path = %path.display(), "Reading artifact");

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Fixture resolver keyed by component name (case-insensitive)
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    artifacts: HashMap<(ArtifactKind, String), String>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, component: &str, content: impl Into<String>) -> Self {
        self.insert(ArtifactKind::Schema, component, content);
        self
    }

    pub fn with_documentation(mut self, component: &str, content: impl Into<String>) -> Self {
        self.insert(ArtifactKind::Documentation, component, content);
        self
    }

    pub fn insert(&mut self, kind: ArtifactKind, component: &str, content: impl Into<String>) {
        self.artifacts
            .insert((kind, component.to_lowercase()), content.into());
    }
}

impl ArtifactResolver for MemoryResolver {
    fn resolve(
        &self,
        kind: ArtifactKind,
        component: &str,
        _reference: &str,
    ) -> io::Result<Option<String>> {
        Ok(self
            .artifacts
            .get(&(kind, component.to_lowercase()))
            .cloned())
    }
}
