//! Registry error types with structured payloads for callers

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::artifacts::ArtifactKind;

/// Fatal problems found while loading the catalog.
///
/// Any of these prevents a [`Catalog`](crate::Catalog) from being built, so no
/// query is ever served against an inconsistent index.
#[derive(Error, Debug)]
pub enum LoadIntegrityError {
    #[error("Unsupported apiVersion '{found}'. Expected '{expected}'")]
    UnsupportedApiVersion {
        found: String,
        expected: &'static str,
    },

    #[error("Invalid kind '{found}'. Expected 'ComponentCatalog'")]
    InvalidKind { found: String },

    #[error("Component at position {position} has an empty name")]
    EmptyName { position: usize },

    /// Names are unique case-insensitively
    #[error("Duplicate component name '{name}' (conflicts with '{existing}')")]
    DuplicateName { name: String, existing: String },

    #[error("Component '{component}' has invalid {field} '{value}'. Valid values: {allowed:?}")]
    InvalidEnumValue {
        component: String,
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Component '{component}' has invalid version '{version}'")]
    InvalidVersion {
        component: String,
        version: String,
        #[source]
        source: semver::Error,
    },
}

/// Per-call registry errors.
///
/// These are recoverable and are meant to be handed back to the caller as
/// data (see [`RegistryError::to_payload`]).
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Component '{name}' not found")]
    ComponentNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("Schema for component '{name}' is not available yet")]
    SchemaNotAvailable { name: String },

    #[error("Documentation for component '{name}' is not available yet")]
    DocumentationNotAvailable { name: String },

    #[error("Invalid query: {reason}")]
    InvalidQuery { reason: &'static str },

    #[error("Failed to read {kind} '{reference}' for component '{name}'")]
    ArtifactRead {
        name: String,
        kind: ArtifactKind,
        reference: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {kind} '{reference}' for component '{name}': {reason}")]
    MalformedArtifact {
        name: String,
        kind: ArtifactKind,
        reference: String,
        reason: String,
    },
}

/// Wire shape of a failed call: `error` + `message` + optional `expected`/`suggestions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl RegistryError {
    /// Stable error kind name
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::ComponentNotFound { .. } => "ComponentNotFound",
            RegistryError::SchemaNotAvailable { .. } => "SchemaNotAvailable",
            RegistryError::DocumentationNotAvailable { .. } => "DocumentationNotAvailable",
            RegistryError::InvalidQuery { .. } => "InvalidQuery",
            RegistryError::ArtifactRead { .. } => "ArtifactRead",
            RegistryError::MalformedArtifact { .. } => "MalformedArtifact",
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        let expected = match self {
            RegistryError::InvalidQuery { .. } => Some(json!({ "minLength": 1 })),
            _ => None,
        };
        let suggestions = match self {
            RegistryError::ComponentNotFound { suggestions, .. } => Some(suggestions.clone()),
            _ => None,
        };

        ErrorPayload {
            error: self.kind(),
            message: self.to_string(),
            expected,
            suggestions,
        }
    }
}

impl LoadIntegrityError {
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: "LoadIntegrityError",
            message: self.to_string(),
            expected: match self {
                LoadIntegrityError::InvalidEnumValue { allowed, .. } => Some(json!(allowed)),
                _ => None,
            },
            suggestions: None,
        }
    }
}
