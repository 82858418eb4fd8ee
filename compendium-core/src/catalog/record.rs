//! Component records and their closed enumerations
//!
//! Records arrive as [`RawComponentRecord`] (plain strings, exactly as written in
//! the catalog source) and are checked into [`ComponentRecord`] before any index
//! is built. Every closed-set field is parsed here, so a value outside its set is
//! a load-time error and never reaches query code.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::LoadIntegrityError;

/// Reference value meaning "artifact not authored yet"
pub const PENDING_REF: &str = "pending";

/// Atomic-design tier of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Atom,
    Molecule,
    Organism,
    Template,
    Pattern,
}

impl Category {
    pub const ALLOWED: &'static [&'static str] =
        &["atom", "molecule", "organism", "template", "pattern"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "atom" => Some(Category::Atom),
            "molecule" => Some(Category::Molecule),
            "organism" => Some(Category::Organism),
            "template" => Some(Category::Template),
            "pattern" => Some(Category::Pattern),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Atom => "atom",
            Category::Molecule => "molecule",
            Category::Organism => "organism",
            Category::Template => "template",
            Category::Pattern => "pattern",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub const ALLOWED: &'static [&'static str] = &["simple", "moderate", "complex"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simple" => Some(Complexity::Simple),
            "moderate" => Some(Complexity::Moderate),
            "complex" => Some(Complexity::Complex),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessibilityLevel {
    A,
    AA,
    AAA,
}

impl AccessibilityLevel {
    pub const ALLOWED: &'static [&'static str] = &["A", "AA", "AAA"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Some(AccessibilityLevel::A),
            "AA" => Some(AccessibilityLevel::AA),
            "AAA" => Some(AccessibilityLevel::AAA),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessibilityLevel::A => "A",
            AccessibilityLevel::AA => "AA",
            AccessibilityLevel::AAA => "AAA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationState {
    Documented,
    Pending,
    Integrated,
}

impl MigrationState {
    pub const ALLOWED: &'static [&'static str] = &["documented", "pending", "integrated"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "documented" => Some(MigrationState::Documented),
            "pending" => Some(MigrationState::Pending),
            "integrated" => Some(MigrationState::Integrated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationState::Documented => "documented",
            MigrationState::Pending => "pending",
            MigrationState::Integrated => "integrated",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AccessibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive dependency lists. Not a build graph: no cycle detection, and
/// component names may point at records that do not exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependencies {
    /// First-party helpers
    #[serde(default)]
    pub internal: Vec<String>,

    /// Third-party package identifiers
    #[serde(default)]
    pub external: Vec<String>,

    /// Names of other components this one composes
    #[serde(default, alias = "component")]
    pub components: Vec<String>,
}

/// A record exactly as it appears in the catalog source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponentRecord {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub location_path: String,
    #[serde(default)]
    pub schema_ref: Option<String>,
    #[serde(default)]
    pub doc_ref: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub complexity: String,
    #[serde(default)]
    pub dependencies: Dependencies,
    pub accessibility_level: String,
    pub version: String,
    #[serde(default)]
    pub has_tests: bool,
    #[serde(default)]
    pub has_storybook_entry: bool,
    pub migration_state: String,
}

/// A checked catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub location_path: String,
    pub schema_ref: Option<String>,
    pub doc_ref: Option<String>,
    pub tags: Vec<String>,
    pub complexity: Complexity,
    pub dependencies: Dependencies,
    pub accessibility_level: AccessibilityLevel,
    pub version: String,
    pub has_tests: bool,
    pub has_storybook_entry: bool,
    pub migration_state: MigrationState,
    has_schema: bool,
    has_documentation: bool,
}

impl ComponentRecord {
    /// Whether a schema artifact is referenced (computed once at load)
    pub fn has_schema(&self) -> bool {
        self.has_schema
    }

    /// Whether a documentation artifact is referenced (computed once at load)
    pub fn has_documentation(&self) -> bool {
        self.has_documentation
    }

    /// Whether any of this record's tags equals `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

impl TryFrom<RawComponentRecord> for ComponentRecord {
    type Error = LoadIntegrityError;

    fn try_from(raw: RawComponentRecord) -> Result<Self, Self::Error> {
        let name = raw.name.trim().to_string();

        let category = Category::parse(&raw.category).ok_or_else(|| {
            invalid_value(&name, "category", &raw.category, Category::ALLOWED)
        })?;
        let complexity = Complexity::parse(&raw.complexity).ok_or_else(|| {
            invalid_value(&name, "complexity", &raw.complexity, Complexity::ALLOWED)
        })?;
        let accessibility_level =
            AccessibilityLevel::parse(&raw.accessibility_level).ok_or_else(|| {
                invalid_value(
                    &name,
                    "accessibilityLevel",
                    &raw.accessibility_level,
                    AccessibilityLevel::ALLOWED,
                )
            })?;
        let migration_state = MigrationState::parse(&raw.migration_state).ok_or_else(|| {
            invalid_value(
                &name,
                "migrationState",
                &raw.migration_state,
                MigrationState::ALLOWED,
            )
        })?;

        semver::Version::parse(raw.version.trim()).map_err(|source| {
            LoadIntegrityError::InvalidVersion {
                component: name.clone(),
                version: raw.version.clone(),
                source,
            }
        })?;

        let schema_ref = normalize_ref(raw.schema_ref);
        let doc_ref = normalize_ref(raw.doc_ref);

        Ok(Self {
            has_schema: schema_ref.is_some(),
            has_documentation: doc_ref.is_some(),
            name,
            category,
            description: raw.description,
            location_path: raw.location_path,
            schema_ref,
            doc_ref,
            tags: dedup_tags(raw.tags),
            complexity,
            dependencies: raw.dependencies,
            accessibility_level,
            version: raw.version.trim().to_string(),
            has_tests: raw.has_tests,
            has_storybook_entry: raw.has_storybook_entry,
            migration_state,
        })
    }
}

fn invalid_value(
    component: &str,
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> LoadIntegrityError {
    LoadIntegrityError::InvalidEnumValue {
        component: component.to_string(),
        field,
        value: value.to_string(),
        allowed,
    }
}

/// Collapse empty and `pending` references to `None`
fn normalize_ref(reference: Option<String>) -> Option<String> {
    reference
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty() && !r.eq_ignore_ascii_case(PENDING_REF))
}

/// Drop repeated tags (ignoring case), keeping the first spelling and order
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && seen.insert(t.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod record_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(name: &str) -> RawComponentRecord {
        RawComponentRecord {
            name: name.to_string(),
            category: "atom".to_string(),
            description: String::new(),
            location_path: "src/components/ui/button.tsx".to_string(),
            schema_ref: Some("schemas/button.json".to_string()),
            doc_ref: Some("pending".to_string()),
            tags: vec![],
            complexity: "simple".to_string(),
            dependencies: Dependencies::default(),
            accessibility_level: "AA".to_string(),
            version: "1.0.0".to_string(),
            has_tests: true,
            has_storybook_entry: false,
            migration_state: "integrated".to_string(),
        }
    }

    #[test]
    fn test_pending_refs_normalize_to_absent() {
        let record = ComponentRecord::try_from(raw("Button")).unwrap();
        assert!(record.has_schema());
        assert!(!record.has_documentation());
        assert_eq!(record.doc_ref, None);

        let mut shouting = raw("Card");
        shouting.schema_ref = Some("  PENDING ".to_string());
        shouting.doc_ref = Some(String::new());
        let record = ComponentRecord::try_from(shouting).unwrap();
        assert!(!record.has_schema());
        assert!(!record.has_documentation());
    }

    #[test]
    fn test_tags_deduplicated_in_order() {
        let mut r = raw("Button");
        r.tags = vec![
            "interactive".to_string(),
            "form".to_string(),
            "Interactive".to_string(),
            "action".to_string(),
            "form".to_string(),
        ];
        let record = ComponentRecord::try_from(r).unwrap();
        assert_eq!(record.tags, vec!["interactive", "form", "action"]);
        assert!(record.has_tag("FORM"));
    }

    #[test]
    fn test_tag_match_folds_non_ascii_case() {
        let mut r = raw("Jacke");
        r.tags = vec!["Überzug".to_string(), "überzug".to_string()];
        let record = ComponentRecord::try_from(r).unwrap();
        assert_eq!(record.tags, vec!["Überzug"]);
        assert!(record.has_tag("ÜBERZUG"));
        assert!(record.has_tag("überzug"));
    }

    #[test]
    fn test_out_of_set_values_rejected() {
        let mut r = raw("Button");
        r.category = "widget".to_string();
        let err = ComponentRecord::try_from(r).unwrap_err();
        assert!(matches!(
            err,
            LoadIntegrityError::InvalidEnumValue { field: "category", .. }
        ));

        let mut r = raw("Button");
        r.accessibility_level = "AAAA".to_string();
        let err = ComponentRecord::try_from(r).unwrap_err();
        assert!(err.to_string().contains("accessibilityLevel"));

        let mut r = raw("Button");
        r.migration_state = "shipped".to_string();
        assert!(ComponentRecord::try_from(r).is_err());
    }

    #[test]
    fn test_version_must_be_semver() {
        let mut r = raw("Button");
        r.version = "1.0".to_string();
        let err = ComponentRecord::try_from(r).unwrap_err();
        assert!(matches!(err, LoadIntegrityError::InvalidVersion { .. }));
    }

    #[test]
    fn test_enum_parsing_ignores_case() {
        assert_eq!(Category::parse("Organism"), Some(Category::Organism));
        assert_eq!(Complexity::parse("COMPLEX"), Some(Complexity::Complex));
        assert_eq!(AccessibilityLevel::parse("aaa"), Some(AccessibilityLevel::AAA));
        assert_eq!(MigrationState::parse("pending"), Some(MigrationState::Pending));
        assert_eq!(Category::parse("page"), None);
    }
}
