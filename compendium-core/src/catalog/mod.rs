//! Compendium Catalog - component metadata store and index
//!
//! The catalog is loaded once, checked, indexed and then only read.
//!
//! # Architecture
//!
//! ```text
//! catalog.yaml / catalog.json
//!     │
//!     ▼
//! CatalogDocument ── RawComponentRecord (strings as written)
//!     │
//!     ▼  TryFrom (closed sets, semver, "pending" → None)
//! ComponentRecord
//!     │
//!     ▼  single pass, duplicate names rejected
//! CatalogIndex (by name / category / tag)
//!     │
//!     ▼
//! Catalog ── queries, artifacts, validation, codegen
//! ```

mod index;
mod record;
mod source;
mod stats;

pub use index::CatalogIndex;
pub use record::{
    AccessibilityLevel, Category, Complexity, ComponentRecord, Dependencies, MigrationState,
    RawComponentRecord, PENDING_REF,
};
pub use source::{CatalogDocument, CATALOG_API_VERSION, CATALOG_KIND};
pub use stats::CatalogStats;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::artifacts::{ArtifactResolver, FsResolver, MemoryResolver};
use crate::codegen::ImportConventions;
use crate::config::{catalog_dir, CompendiumConfig};
use crate::error::LoadIntegrityError;

/// A loaded, immutable component catalog.
///
/// Construct one explicitly and hand it to whatever serves requests; there is
/// no process-wide instance. All read operations take `&self`, so a `Catalog`
/// can be shared freely between threads.
pub struct Catalog {
    index: CatalogIndex,
    resolver: Arc<dyn ArtifactResolver>,
    imports: ImportConventions,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("components", &self.index.len())
            .field("imports", &self.imports)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Check and index raw records.
    ///
    /// Artifacts resolve against an empty in-memory resolver until
    /// [`Catalog::with_resolver`] is used.
    pub fn from_records(records: Vec<RawComponentRecord>) -> Result<Self, LoadIntegrityError> {
        let records = records
            .into_iter()
            .map(ComponentRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let index = CatalogIndex::build(records)?;
        report_dangling_dependencies(&index);

        info!(components = index.len(), "Catalog loaded");

        Ok(Self {
            index,
            resolver: Arc::new(MemoryResolver::new()),
            imports: ImportConventions::default(),
        })
    }

    /// Check the document header, then the records
    pub fn from_document(document: CatalogDocument) -> Result<Self, LoadIntegrityError> {
        document.validate()?;
        Self::from_records(document.components)
    }

    /// Load a catalog file. Artifacts resolve relative to the file's
    /// directory unless a resolver is set afterwards.
    pub fn load(path: &Path) -> Result<Self> {
        let document = CatalogDocument::from_file(path)?;
        let catalog = Self::from_document(document)
            .with_context(|| format!("Catalog integrity check failed: {}", path.display()))?;

        Ok(catalog.with_resolver(FsResolver::new(catalog_dir(path))))
    }

    /// Load the catalog named by a configuration. Artifacts resolve against
    /// the configured artifact root, or the catalog's directory when unset.
    pub fn from_config(config: &CompendiumConfig) -> Result<Self> {
        let catalog = Self::load(&config.catalog)?;
        Ok(catalog
            .with_resolver(FsResolver::new(config.artifact_root()))
            .with_import_conventions(config.imports.clone()))
    }

    pub fn with_resolver(mut self, resolver: impl ArtifactResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn with_import_conventions(mut self, imports: ImportConventions) -> Self {
        self.imports = imports;
        self
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub(crate) fn resolver(&self) -> &dyn ArtifactResolver {
        self.resolver.as_ref()
    }

    pub fn imports(&self) -> &ImportConventions {
        &self.imports
    }

    /// Every record in catalog order
    pub fn all(&self) -> &[ComponentRecord] {
        self.index.records()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.all().iter().map(|r| r.name.as_str()).collect()
    }

    /// Plain lookup without suggestions
    pub fn get(&self, name: &str) -> Option<&ComponentRecord> {
        self.index.get(name)
    }
}

/// Component dependencies may point at names that are not cataloged; that is
/// allowed, but worth surfacing once at load time.
fn report_dangling_dependencies(index: &CatalogIndex) {
    for record in index.records() {
        for dependency in &record.dependencies.components {
            if index.position_of(dependency).is_none() {
                warn!(
                    component = %record.name,
                    dependency = %dependency,
                    "Component dependency is not in the catalog"
                );
            }
        }
    }
}
