//! Catalog queries: filtering, keyword search and lookup-by-name
//!
//! Every query is a pure read of the index. Results always come back in
//! catalog order; nothing is re-sorted by relevance.

mod dependencies;
mod suggest;

pub use dependencies::DependencyView;
pub use suggest::{suggestions_for, MAX_SUGGESTIONS, MAX_SUGGESTION_DISTANCE};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

use crate::catalog::{Catalog, Category, Complexity, ComponentRecord};
use crate::error::RegistryError;

/// Conjunction of optional predicates. `None` means "don't care".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFilter {
    #[serde(default)]
    pub category: Option<Category>,

    /// Matches records carrying at least one of these tags. Empty means no
    /// tag constraint.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub complexity: Option<Complexity>,

    #[serde(default)]
    pub has_schema: Option<bool>,

    #[serde(default)]
    pub has_documentation: Option<bool>,

    #[serde(default)]
    pub has_tests: Option<bool>,
}

impl ComponentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn has_schema(mut self, has_schema: bool) -> Self {
        self.has_schema = Some(has_schema);
        self
    }

    pub fn has_documentation(mut self, has_documentation: bool) -> Self {
        self.has_documentation = Some(has_documentation);
        self
    }

    pub fn has_tests(mut self, has_tests: bool) -> Self {
        self.has_tests = Some(has_tests);
        self
    }

    /// Check every predicate except tags, which the catalog resolves through
    /// its tag index
    fn matches_scalars(&self, record: &ComponentRecord) -> bool {
        self.category.map_or(true, |c| record.category == c)
            && self.complexity.map_or(true, |c| record.complexity == c)
            && self.has_schema.map_or(true, |b| record.has_schema() == b)
            && self
                .has_documentation
                .map_or(true, |b| record.has_documentation() == b)
            && self.has_tests.map_or(true, |b| record.has_tests == b)
    }
}

/// Why a keyword search matched a record. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    Name,
    Tag,
    Description,
}

impl Relevance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relevance::Name => "name",
            Relevance::Tag => "tag",
            Relevance::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    #[serde(rename = "component")]
    pub record: &'a ComponentRecord,
    pub relevance: Relevance,
}

impl Catalog {
    /// Records satisfying every supplied predicate, in catalog order
    pub fn filter(&self, filter: &ComponentFilter) -> Vec<&ComponentRecord> {
        let index = self.index();

        let tagged: Option<HashSet<usize>> = if filter.tags.is_empty() {
            None
        } else {
            Some(
                filter
                    .tags
                    .iter()
                    .flat_map(|tag| index.positions_with_tag(tag).iter().copied())
                    .collect(),
            )
        };

        let candidates: Box<dyn Iterator<Item = usize> + '_> = match filter.category {
            Some(category) => Box::new(index.positions_in_category(category).iter().copied()),
            None => Box::new(0..index.len()),
        };

        let results: Vec<&ComponentRecord> = candidates
            .filter(|p| tagged.as_ref().map_or(true, |set| set.contains(p)))
            .map(|p| index.record_at(p))
            .filter(|record| filter.matches_scalars(record))
            .collect();

        trace!(?filter, matches = results.len(), "Filtered catalog");
        results
    }

    pub fn by_category(&self, category: Category) -> Vec<&ComponentRecord> {
        self.filter(&ComponentFilter::new().category(category))
    }

    pub fn atoms(&self) -> Vec<&ComponentRecord> {
        self.by_category(Category::Atom)
    }

    pub fn molecules(&self) -> Vec<&ComponentRecord> {
        self.by_category(Category::Molecule)
    }

    pub fn organisms(&self) -> Vec<&ComponentRecord> {
        self.by_category(Category::Organism)
    }

    /// Case-insensitive substring search over name, tags and description.
    ///
    /// An empty query is rejected rather than treated as "match everything".
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit<'_>>, RegistryError> {
        if query.is_empty() {
            return Err(RegistryError::InvalidQuery {
                reason: "search query must not be empty",
            });
        }

        let query_lower = query.to_lowercase();

        let hits: Vec<SearchHit<'_>> = self
            .all()
            .iter()
            .filter_map(|record| {
                let relevance = if record.name.to_lowercase().contains(&query_lower) {
                    Relevance::Name
                } else if record
                    .tags
                    .iter()
                    .any(|t| t.to_lowercase().contains(&query_lower))
                {
                    Relevance::Tag
                } else if record.description.to_lowercase().contains(&query_lower) {
                    Relevance::Description
                } else {
                    return None;
                };

                Some(SearchHit { record, relevance })
            })
            .collect();

        trace!(query, matches = hits.len(), "Searched catalog");
        Ok(hits)
    }

    /// Exact lookup (any casing). Misses carry up to five suggestions.
    pub fn lookup(&self, name: &str) -> Result<&ComponentRecord, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::ComponentNotFound {
                name: name.to_string(),
                suggestions: suggestions_for(self.all(), name),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture_catalog, names};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let catalog = fixture_catalog();
        let all = catalog.filter(&ComponentFilter::new());
        assert_eq!(names(all), catalog.names());
    }

    #[test]
    fn test_filter_category_and_schema() {
        let catalog = fixture_catalog();

        let results =
            catalog.filter(&ComponentFilter::new().category(Category::Atom).has_schema(true));
        assert_eq!(names(results), vec!["Button", "Input"]);

        let results =
            catalog.filter(&ComponentFilter::new().category(Category::Atom).has_schema(false));
        assert_eq!(names(results), vec!["Badge"]);
    }

    #[test]
    fn test_tag_filter_is_any_of() {
        let catalog = fixture_catalog();

        let form = catalog.filter(&ComponentFilter::new().tag("form"));
        let status = catalog.filter(&ComponentFilter::new().tag("status"));
        let either = catalog.filter(&ComponentFilter::new().tag("form").tag("status"));

        assert_eq!(names(form.clone()), vec!["Button", "Input", "FormField"]);
        assert_eq!(names(status.clone()), vec!["Badge", "EmptyState"]);

        // Union of the single-tag results, still in catalog order
        let union: HashSet<&str> = names(form).into_iter().chain(names(status)).collect();
        let either_names = names(either);
        assert_eq!(either_names.iter().copied().collect::<HashSet<_>>(), union);
        assert_eq!(
            either_names,
            vec!["Button", "Input", "Badge", "FormField", "EmptyState"]
        );
    }

    #[test]
    fn test_tag_filter_ignores_case() {
        let catalog = fixture_catalog();
        let results = catalog.filter(&ComponentFilter::new().tag("OVERLAY"));
        assert_eq!(names(results), vec!["Dialog"]);
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let catalog = fixture_catalog();
        assert!(catalog
            .filter(&ComponentFilter::new().tag("nonexistent"))
            .is_empty());
    }

    #[test]
    fn test_conjunction_is_subset_of_each_predicate() {
        let catalog = fixture_catalog();
        let predicates = [
            ComponentFilter::new().category(Category::Organism),
            ComponentFilter::new().tag("display"),
            ComponentFilter::new().complexity(Complexity::Complex),
            ComponentFilter::new().has_tests(true),
            ComponentFilter::new().has_documentation(false),
        ];

        for a in &predicates {
            for b in &predicates {
                let combined = ComponentFilter {
                    category: a.category.or(b.category),
                    tags: a.tags.iter().chain(&b.tags).cloned().collect(),
                    complexity: a.complexity.or(b.complexity),
                    has_schema: a.has_schema.or(b.has_schema),
                    has_documentation: a.has_documentation.or(b.has_documentation),
                    has_tests: a.has_tests.or(b.has_tests),
                };

                let left: HashSet<&str> = names(catalog.filter(a)).into_iter().collect();
                let right: HashSet<&str> = names(catalog.filter(b)).into_iter().collect();
                for name in names(catalog.filter(&combined)) {
                    assert!(left.contains(name) && right.contains(name), "{name}");
                }
            }
        }
    }

    #[test]
    fn test_category_shortcuts() {
        let catalog = fixture_catalog();
        assert_eq!(names(catalog.atoms()), vec!["Button", "Input", "Badge"]);
        assert_eq!(names(catalog.molecules()), vec!["Card", "FormField"]);
        assert_eq!(names(catalog.organisms()), vec!["DataTable", "Dialog"]);
        assert_eq!(names(catalog.by_category(Category::Template)), vec!["DashboardShell"]);
    }

    #[test]
    fn test_search_relevance_priority() {
        let catalog = fixture_catalog();
        let hits = catalog.search("form").unwrap();

        let summary: Vec<(&str, Relevance)> = hits
            .iter()
            .map(|h| (h.record.name.as_str(), h.relevance))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Button", Relevance::Tag),
                ("Input", Relevance::Tag),
                ("FormField", Relevance::Name),
                ("DataTable", Relevance::Description),
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = fixture_catalog();

        let partial = catalog.search("but").unwrap();
        assert!(partial.iter().any(|h| h.record.name == "Button"));

        let upper = catalog.search("BUTTON").unwrap();
        let lower = catalog.search("button").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_search_tag_substring() {
        let catalog = fixture_catalog();
        let hits = catalog.search("text-ent").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.name, "Input");
        assert_eq!(hits[0].relevance, Relevance::Tag);
    }

    #[test]
    fn test_empty_search_rejected() {
        let catalog = fixture_catalog();
        let err = catalog.search("").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidQuery { .. }));
    }

    #[test]
    fn test_search_hit_serializes_relevance() {
        let catalog = fixture_catalog();
        let hits = catalog.search("modal").unwrap();
        let value = serde_json::to_value(&hits).unwrap();
        assert_eq!(value[0]["relevance"], "description");
        assert_eq!(value[0]["component"]["name"], "Dialog");
    }

    #[test]
    fn test_lookup_any_casing() {
        let catalog = fixture_catalog();
        assert_eq!(catalog.lookup("datatable").unwrap().name, "DataTable");
        assert_eq!(catalog.lookup("DATATABLE").unwrap().name, "DataTable");
    }

    #[test]
    fn test_lookup_miss_suggests_cataloged_names() {
        let catalog = fixture_catalog();

        match catalog.lookup("Buton").unwrap_err() {
            RegistryError::ComponentNotFound { name, suggestions } => {
                assert_eq!(name, "Buton");
                assert_eq!(suggestions, vec!["Button"]);
            }
            other => panic!("unexpected error: {other}"),
        }

        match catalog.lookup("NonExistent").unwrap_err() {
            RegistryError::ComponentNotFound { suggestions, .. } => {
                assert!(suggestions.len() <= MAX_SUGGESTIONS);
                for s in &suggestions {
                    assert!(catalog.get(s).is_some());
                }
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
