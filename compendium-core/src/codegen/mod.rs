//! Code-text generation: import lines, usage snippets, alternatives
//!
//! Output is deterministic: the same record and props always produce the same
//! bytes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::catalog::{Catalog, ComponentRecord};
use crate::error::RegistryError;

pub const MAX_ALTERNATIVES: usize = 5;

/// How source locations map onto import specifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportConventions {
    /// Prefix stripped from `locationPath`
    pub source_root: String,

    /// Prefix the import specifier starts with
    pub alias: String,

    /// Source extensions stripped from the end, first match wins
    pub extensions: Vec<String>,
}

impl Default for ImportConventions {
    fn default() -> Self {
        Self {
            source_root: "src/".to_string(),
            alias: "@/".to_string(),
            extensions: [".tsx", ".ts", ".jsx", ".js"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl ImportConventions {
    /// `src/components/ui/button.tsx` -> `@/components/ui/button`.
    ///
    /// Locations outside the source root keep their path under the alias.
    pub fn import_path(&self, location: &str) -> String {
        let location = location.trim();
        let location = location.strip_prefix("./").unwrap_or(location);
        let relative = location
            .strip_prefix(self.source_root.as_str())
            .unwrap_or(location);
        let stem = self
            .extensions
            .iter()
            .find_map(|ext| relative.strip_suffix(ext.as_str()))
            .unwrap_or(relative);

        format!("{}{}", self.alias, stem)
    }
}

pub fn import_statement(record: &ComponentRecord, conventions: &ImportConventions) -> String {
    format!(
        "import {{ {} }} from '{}'",
        record.name,
        conventions.import_path(&record.location_path)
    )
}

/// Type import assuming the `<Name>Props` convention. The schema is not
/// consulted, so the type may not exist.
pub fn type_import_statement(record: &ComponentRecord, conventions: &ImportConventions) -> String {
    format!(
        "import type {{ {}Props }} from '{}'",
        record.name,
        conventions.import_path(&record.location_path)
    )
}

/// Render a JSX tag for `record`.
///
/// Strings become `key="value"`, `true` a bare `key`, `false` is dropped, and
/// everything else `key={json}`. Props render in the map's own order.
pub fn usage_text(
    record: &ComponentRecord,
    props: &Map<String, Value>,
    children: Option<&str>,
) -> String {
    let mut tag = format!("<{}", record.name);

    for (key, value) in props {
        match value {
            Value::String(s) => tag.push_str(&format!(" {}=\"{}\"", key, s)),
            Value::Bool(true) => tag.push_str(&format!(" {}", key)),
            Value::Bool(false) => {}
            other => tag.push_str(&format!(" {}={{{}}}", key, other)),
        }
    }

    match children {
        Some(children) => format!("{}>{}</{}>", tag, children, record.name),
        None => format!("{} />", tag),
    }
}

impl Catalog {
    pub fn import_statement(&self, name: &str) -> Result<String, RegistryError> {
        let record = self.lookup(name)?;
        Ok(import_statement(record, self.imports()))
    }

    pub fn type_import_statement(&self, name: &str) -> Result<String, RegistryError> {
        let record = self.lookup(name)?;
        Ok(type_import_statement(record, self.imports()))
    }

    pub fn usage_text(
        &self,
        name: &str,
        props: &Map<String, Value>,
        children: Option<&str>,
    ) -> Result<String, RegistryError> {
        let record = self.lookup(name)?;
        Ok(usage_text(record, props, children))
    }

    /// Up to five other components sharing at least one tag, most shared
    /// tags first, ties in catalog order. Category is ignored.
    pub fn alternatives(&self, name: &str) -> Result<Vec<&str>, RegistryError> {
        let record = self.lookup(name)?;
        let index = self.index();
        let own = index.position_of(&record.name);

        let mut shared: HashMap<usize, usize> = HashMap::new();
        for tag in &record.tags {
            for &position in index.positions_with_tag(tag) {
                if Some(position) != own {
                    *shared.entry(position).or_default() += 1;
                }
            }
        }

        let mut ranked: Vec<(usize, usize)> = shared.into_iter().collect();
        ranked.sort_by(|(pa, ca), (pb, cb)| cb.cmp(ca).then(pa.cmp(pb)));

        Ok(ranked
            .into_iter()
            .take(MAX_ALTERNATIVES)
            .map(|(position, _)| index.record_at(position).name.as_str())
            .collect())
    }
}
