//! Dependency views over the descriptive dependency lists

use serde::Serialize;

use crate::catalog::{Catalog, ComponentRecord};
use crate::error::RegistryError;

/// A record's dependencies with component names resolved where possible
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyView<'a> {
    pub component: &'a str,
    pub internal: &'a [String],
    pub external: &'a [String],
    /// Component dependencies present in the catalog
    pub resolved: Vec<&'a ComponentRecord>,
    /// Component dependencies with no matching record
    pub dangling: Vec<&'a str>,
}

impl Catalog {
    /// Resolve a component's dependency lists. Unknown component dependency
    /// names are reported as dangling, not as errors.
    pub fn dependencies(&self, name: &str) -> Result<DependencyView<'_>, RegistryError> {
        let record = self.lookup(name)?;

        let mut resolved = Vec::new();
        let mut dangling = Vec::new();
        for dependency in &record.dependencies.components {
            match self.get(dependency) {
                Some(found) => resolved.push(found),
                None => dangling.push(dependency.as_str()),
            }
        }

        Ok(DependencyView {
            component: &record.name,
            internal: &record.dependencies.internal,
            external: &record.dependencies.external,
            resolved,
            dangling,
        })
    }

    /// Records that list `name` as a component dependency, in catalog order
    pub fn dependents(&self, name: &str) -> Result<Vec<&ComponentRecord>, RegistryError> {
        let target = self.lookup(name)?;
        let index = self.index();
        let target_position = index.position_of(&target.name);

        Ok(self
            .all()
            .iter()
            .filter(|record| {
                record
                    .dependencies
                    .components
                    .iter()
                    .any(|d| index.position_of(d) == target_position)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, CatalogDocument};
    use crate::error::RegistryError;
    use crate::testing::{fixture_catalog, names};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dependencies_split_resolved_and_dangling() {
        let catalog = fixture_catalog();
        let view = catalog.dependencies("datatable").unwrap();

        assert_eq!(view.component, "DataTable");
        assert_eq!(names(view.resolved.iter().copied()), vec!["Button", "Input"]);
        assert_eq!(view.dangling, vec!["Pagination"]);
        assert_eq!(view.external, &["@tanstack/react-table".to_string()]);
    }

    #[test]
    fn test_dependencies_of_leaf() {
        let catalog = fixture_catalog();
        let view = catalog.dependencies("Badge").unwrap();
        assert!(view.resolved.is_empty());
        assert!(view.dangling.is_empty());
    }

    #[test]
    fn test_dependents() {
        let catalog = fixture_catalog();
        assert_eq!(
            names(catalog.dependents("Button").unwrap()),
            vec!["Card", "DataTable"]
        );
        assert_eq!(
            names(catalog.dependents("input").unwrap()),
            vec!["FormField", "DataTable"]
        );
        assert!(catalog.dependents("Dialog").unwrap().is_empty());
    }

    #[test]
    fn test_dependents_agree_with_dependencies_on_non_ascii_names() {
        let yaml = r#"
apiVersion: compendium.dev/v1
kind: ComponentCatalog
components:
  - { name: Ärmel, category: atom, locationPath: src/aermel.tsx, complexity: simple, accessibilityLevel: AA, version: 1.0.0, migrationState: integrated }
  - { name: Jacke, category: molecule, locationPath: src/jacke.tsx, complexity: simple, dependencies: { components: [ärmel] }, accessibilityLevel: AA, version: 1.0.0, migrationState: integrated }
"#;
        let catalog =
            Catalog::from_document(CatalogDocument::from_yaml(yaml).unwrap()).unwrap();

        let view = catalog.dependencies("Jacke").unwrap();
        assert_eq!(names(view.resolved.iter().copied()), vec!["Ärmel"]);
        assert!(view.dangling.is_empty());

        assert_eq!(names(catalog.dependents("ÄRMEL").unwrap()), vec!["Jacke"]);
    }

    #[test]
    fn test_unknown_component() {
        let catalog = fixture_catalog();
        assert!(matches!(
            catalog.dependencies("Pagination"),
            Err(RegistryError::ComponentNotFound { .. })
        ));
    }
}
