//! Catalog-wide counts

use serde::Serialize;
use std::collections::BTreeMap;

use super::{Catalog, Category, Complexity, MigrationState};

/// Summary counts over the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_complexity: BTreeMap<Complexity, usize>,
    pub by_migration_state: BTreeMap<MigrationState, usize>,
    pub with_schema: usize,
    pub with_documentation: usize,
    pub with_tests: usize,
    pub with_storybook_entry: usize,
}

impl Catalog {
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();

        for record in self.all() {
            stats.total += 1;
            *stats.by_category.entry(record.category).or_default() += 1;
            *stats.by_complexity.entry(record.complexity).or_default() += 1;
            *stats
                .by_migration_state
                .entry(record.migration_state)
                .or_default() += 1;

            stats.with_schema += usize::from(record.has_schema());
            stats.with_documentation += usize::from(record.has_documentation());
            stats.with_tests += usize::from(record.has_tests);
            stats.with_storybook_entry += usize::from(record.has_storybook_entry);
        }

        stats
    }
}
