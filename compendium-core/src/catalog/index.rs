//! In-memory lookup structures over the checked records
//!
//! Built once in a single pass; never mutated afterwards.

use std::collections::HashMap;
use tracing::{debug, trace};

use super::record::{Category, ComponentRecord};
use crate::error::LoadIntegrityError;

/// Name, category and tag lookups over records held in catalog order
#[derive(Debug, Default)]
pub struct CatalogIndex {
    records: Vec<ComponentRecord>,

    /// Lowercased name -> position
    by_name: HashMap<String, usize>,

    /// Category -> positions in catalog order
    by_category: HashMap<Category, Vec<usize>>,

    /// Lowercased tag -> positions in catalog order
    by_tag: HashMap<String, Vec<usize>>,
}

impl CatalogIndex {
    /// Build the index, failing on the first duplicate (case-insensitive) name
    pub fn build(records: Vec<ComponentRecord>) -> Result<Self, LoadIntegrityError> {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_category: HashMap<Category, Vec<usize>> = HashMap::new();
        let mut by_tag: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            if record.name.is_empty() {
                return Err(LoadIntegrityError::EmptyName { position });
            }

            let key = record.name.to_lowercase();
            if let Some(&existing) = by_name.get(&key) {
                let existing: &ComponentRecord = &records[existing];
                return Err(LoadIntegrityError::DuplicateName {
                    name: record.name.clone(),
                    existing: existing.name.clone(),
                });
            }
            by_name.insert(key, position);

            by_category
                .entry(record.category)
                .or_default()
                .push(position);

            // Tags are already deduplicated per record
            for tag in &record.tags {
                by_tag.entry(tag.to_lowercase()).or_default().push(position);
            }

            trace!(name = %record.name, position, "Indexed component");
        }

        debug!(
            records = records.len(),
            categories = by_category.len(),
            tags = by_tag.len(),
            "Built catalog index"
        );

        Ok(Self {
            records,
            by_name,
            by_category,
            by_tag,
        })
    }

    /// All records in catalog order
    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the record named `name` (any casing)
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    pub fn get(&self, name: &str) -> Option<&ComponentRecord> {
        self.position_of(name).map(|p| &self.records[p])
    }

    /// Positions of records in `category`, in catalog order
    pub fn positions_in_category(&self, category: Category) -> &[usize] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Positions of records carrying `tag` (any casing), in catalog order
    pub fn positions_with_tag(&self, tag: &str) -> &[usize] {
        self.by_tag
            .get(&tag.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn record_at(&self, position: usize) -> &ComponentRecord {
        &self.records[position]
    }
}
