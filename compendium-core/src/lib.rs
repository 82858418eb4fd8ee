//! Compendium core library exports
//!
//! Load a component catalog once, then query, validate and generate code
//! text against it:
//!
//! ```no_run
//! use compendium_core::{Catalog, ComponentFilter, Category};
//!
//! let catalog = Catalog::load(std::path::Path::new("registry/catalog.yaml"))?;
//! let atoms = catalog.filter(&ComponentFilter::new().category(Category::Atom).has_schema(true));
//! let import = catalog.import_statement("Button")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod artifacts;
pub mod catalog;
pub mod codegen;
pub mod config;
pub mod error;
pub mod query;
pub mod validator;

#[cfg(test)]
mod testing;

pub use artifacts::{ArtifactKind, ArtifactResolver, FsResolver, MemoryResolver};
pub use catalog::{
    AccessibilityLevel, Catalog, CatalogDocument, CatalogStats, Category, Complexity,
    ComponentRecord, Dependencies, MigrationState, RawComponentRecord,
};
pub use codegen::ImportConventions;
pub use config::CompendiumConfig;
pub use error::{ErrorPayload, LoadIntegrityError, RegistryError};
pub use query::{ComponentFilter, DependencyView, Relevance, SearchHit};
pub use validator::{validate_props, validate_tokens, PropValidation, TokenValidation};
