//! Configuration discovery and loading
//!
//! Resolution order:
//! 1. Explicit path (CLI `--config`)
//! 2. `compendium.yaml` in the working directory
//! 3. `config.yaml` in the platform config directory
//! 4. Built-in defaults
//!
//! `COMPENDIUM_CATALOG` overrides the catalog path after loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::codegen::ImportConventions;

pub const CONFIG_FILE_NAME: &str = "compendium.yaml";
pub const CATALOG_ENV_VAR: &str = "COMPENDIUM_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompendiumConfig {
    /// Catalog source (YAML or JSON)
    pub catalog: PathBuf,

    /// Root directory that schema and doc references resolve against.
    /// Unset means the catalog file's own directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_root: Option<PathBuf>,

    /// Import specifier conventions for generated code
    pub imports: ImportConventions,
}

impl Default for CompendiumConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("registry/catalog.yaml"),
            artifact_root: None,
            imports: ImportConventions::default(),
        }
    }
}

impl CompendiumConfig {
    /// Discover and load configuration, then apply environment overrides
    pub fn discover(cli_override: Option<&Path>) -> Result<Self> {
        let mut config = match Self::locate(cli_override)? {
            Some(path) => Self::load_from_path(&path)?,
            None => {
                debug!("No configuration file found, using defaults");
                Self::default()
            }
        };

        if let Some(catalog) = std::env::var_os(CATALOG_ENV_VAR) {
            debug!(catalog = ?catalog, "Catalog path overridden from environment");
            config.catalog = PathBuf::from(catalog);
        }

        Ok(config)
    }

    fn locate(cli_override: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = cli_override {
            if !path.exists() {
                anyhow::bail!("Config file does not exist: {}", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        trace!(path = %local.display(), "Checking working directory config");
        if local.exists() {
            return Ok(Some(local));
        }

        let user = directories::ProjectDirs::from("dev", "compendium", "compendium")
            .map(|dirs| dirs.config_dir().join("config.yaml"));
        if let Some(user) = user {
            trace!(path = %user.display(), "Checking user config");
            if user.exists() {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    /// Load a config file. Relative paths inside it resolve against the
    /// file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.catalog = rebase(base, &config.catalog);
            config.artifact_root = config.artifact_root.map(|root| rebase(base, &root));
        }

        debug!(path = %path.display(), catalog = %config.catalog.display(), "Loaded configuration");
        Ok(config)
    }

    /// Directory artifact references resolve against
    pub fn artifact_root(&self) -> PathBuf {
        match &self.artifact_root {
            Some(root) => root.clone(),
            None => catalog_dir(&self.catalog),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Invalid config YAML")
    }
}

pub(crate) fn catalog_dir(catalog: &Path) -> PathBuf {
    match catalog.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn rebase(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
