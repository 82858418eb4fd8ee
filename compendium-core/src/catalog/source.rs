//! Catalog source parsing (catalog.yaml / catalog.json)
//!
//! The catalog source lists every component record in display order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::record::RawComponentRecord;
use crate::error::LoadIntegrityError;

pub const CATALOG_API_VERSION: &str = "compendium.dev/v1";
pub const CATALOG_KIND: &str = "ComponentCatalog";

/// A catalog source document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// API version (must be "compendium.dev/v1")
    pub api_version: String,

    /// Kind (must be "ComponentCatalog")
    pub kind: String,

    /// Component records, in catalog order
    #[serde(default)]
    pub components: Vec<RawComponentRecord>,
}

impl Default for CatalogDocument {
    fn default() -> Self {
        Self {
            api_version: CATALOG_API_VERSION.to_string(),
            kind: CATALOG_KIND.to_string(),
            components: Vec::new(),
        }
    }
}

impl CatalogDocument {
    /// Load a catalog document, picking the format from the file extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let document = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };

        document.with_context(|| format!("Failed to parse catalog: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Invalid catalog YAML")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid catalog JSON")
    }

    /// Check the document header
    pub fn validate(&self) -> Result<(), LoadIntegrityError> {
        if self.api_version != CATALOG_API_VERSION {
            return Err(LoadIntegrityError::UnsupportedApiVersion {
                found: self.api_version.clone(),
                expected: CATALOG_API_VERSION,
            });
        }

        if self.kind != CATALOG_KIND {
            return Err(LoadIntegrityError::InvalidKind {
                found: self.kind.clone(),
            });
        }

        Ok(())
    }
}
