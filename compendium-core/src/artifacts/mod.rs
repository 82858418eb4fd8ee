//! Schema and documentation loading
//!
//! Artifacts are fetched through an [`ArtifactResolver`], so the catalog does
//! not care whether they live on disk, are embedded, or are test fixtures.
//! Nothing is cached: every call reflects what the resolver returns now.

mod resolver;

pub use resolver::{ArtifactResolver, FsResolver, MemoryResolver};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::catalog::{Catalog, ComponentRecord};
use crate::error::RegistryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Schema,
    Documentation,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Schema => f.write_str("schema"),
            ArtifactKind::Documentation => f.write_str("documentation"),
        }
    }
}

impl Catalog {
    /// Load a component's schema as structured data.
    ///
    /// Distinguishes "no such component" from "component exists, schema not
    /// authored". The schema's shape is not checked here.
    pub fn schema(&self, name: &str) -> Result<Value, RegistryError> {
        let record = self.lookup(name)?;
        let reference = match (record.has_schema(), record.schema_ref.as_deref()) {
            (true, Some(reference)) => reference,
            _ => {
                return Err(RegistryError::SchemaNotAvailable {
                    name: record.name.clone(),
                })
            }
        };

        let content = self
            .fetch(ArtifactKind::Schema, record, reference)?
            .ok_or_else(|| RegistryError::SchemaNotAvailable {
                name: record.name.clone(),
            })?;

        parse_schema(&content, reference).map_err(|reason| RegistryError::MalformedArtifact {
            name: record.name.clone(),
            kind: ArtifactKind::Schema,
            reference: reference.to_string(),
            reason,
        })
    }

    /// Load a component's documentation text verbatim
    pub fn documentation(&self, name: &str) -> Result<String, RegistryError> {
        let record = self.lookup(name)?;
        let reference = match (record.has_documentation(), record.doc_ref.as_deref()) {
            (true, Some(reference)) => reference,
            _ => {
                return Err(RegistryError::DocumentationNotAvailable {
                    name: record.name.clone(),
                })
            }
        };

        self.fetch(ArtifactKind::Documentation, record, reference)?
            .ok_or_else(|| RegistryError::DocumentationNotAvailable {
                name: record.name.clone(),
            })
    }

    fn fetch(
        &self,
        kind: ArtifactKind,
        record: &ComponentRecord,
        reference: &str,
    ) -> Result<Option<String>, RegistryError> {
        debug!(component = %record.name, %kind, reference, "Resolving artifact");

        self.resolver()
            .resolve(kind, &record.name, reference)
            .map_err(|source| RegistryError::ArtifactRead {
                name: record.name.clone(),
                kind,
                reference: reference.to_string(),
                source,
            })
    }
}

/// YAML for `.yaml`/`.yml` references, JSON otherwise
fn parse_schema(content: &str, reference: &str) -> Result<Value, String> {
    let lower = reference.to_ascii_lowercase();
    if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        serde_yaml_ng::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }
}
