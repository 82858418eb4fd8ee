//! "Did you mean" suggestions for missed lookups

use crate::catalog::ComponentRecord;

pub const MAX_SUGGESTIONS: usize = 5;

/// Largest edit distance still considered a near miss
pub const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Names that contain the query, are contained by it, or are within
/// [`MAX_SUGGESTION_DISTANCE`] edits of it (case-insensitive).
///
/// Suggestions keep catalog order and are capped at [`MAX_SUGGESTIONS`].
pub fn suggestions_for(records: &[ComponentRecord], query: &str) -> Vec<String> {
    let query = query.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let name = record.name.to_lowercase();
            name.contains(&query)
                || query.contains(&name)
                || strsim::levenshtein(&name, &query) <= MAX_SUGGESTION_DISTANCE
        })
        .take(MAX_SUGGESTIONS)
        .map(|record| record.name.clone())
        .collect()
}
