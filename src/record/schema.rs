use serde::{Deserialize, Serialize};

/// Field delimiter of the dataset and of the persisted index file
pub const FIELD_DELIMITER: char = ',';

/// Quote character wrapped around text fields in the dataset
pub const QUOTE: char = '"';

/// Positional schema of the address dataset.
///
/// The dataset is a fixed, positional CSV (the JP postal `KEN_ALL` layout by
/// default): JIS code, old zip, postal code, three kana name components,
/// three kanji name components, then six numeric flags. All field positions
/// used by normalization and indexing live here instead of being scattered as
/// magic indices, and every row is validated against the schema before any
/// field is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Field grouping fragments of one logical record (postal code)
    pub merge_key_field: usize,
    /// Field carrying the multi-line continuation flag
    pub continuation_field: usize,
    /// Flag value that marks a line as a fragment of a split record.
    /// Compared by exact string equality; anything else, including an
    /// absent field, means "not continued".
    pub continued_code: String,
    /// Fields whose text is concatenated when fragments are merged
    pub mergeable_fields: Vec<usize>,
    /// Fields whose text feeds the bi-gram index
    pub indexable_fields: Vec<usize>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            merge_key_field: 2,
            continuation_field: 12,
            continued_code: "1".to_string(),
            mergeable_fields: vec![5, 8],
            indexable_fields: vec![6, 7, 8],
        }
    }
}

impl SchemaConfig {
    /// Minimum number of fields a row must have to be parseable.
    ///
    /// The continuation flag is deliberately excluded: trailing flag fields
    /// may be absent on hand-trimmed datasets, and an absent flag already
    /// has a defined meaning ("not continued").
    pub fn required_fields(&self) -> usize {
        let max_field = self
            .mergeable_fields
            .iter()
            .chain(self.indexable_fields.iter())
            .chain(std::iter::once(&self.merge_key_field))
            .copied()
            .max()
            .unwrap_or(0);
        max_field + 1
    }
}

/// Remove every quote character from a field's text
pub fn strip_quotes(s: &str) -> String {
    s.replace(QUOTE, "")
}

/// Wrap concatenated field text back in quotes
pub fn requote(s: &str) -> String {
    format!("{QUOTE}{s}{QUOTE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema() {
        let schema = SchemaConfig::default();
        assert_eq!(schema.merge_key_field, 2);
        assert_eq!(schema.continuation_field, 12);
        assert_eq!(schema.indexable_fields, vec![6, 7, 8]);
    }

    #[test]
    fn test_required_fields_covers_indexable_span() {
        let schema = SchemaConfig::default();
        // Highest field normalization or indexing reads is town (8)
        assert_eq!(schema.required_fields(), 9);
    }

    #[test]
    fn test_strip_and_requote() {
        assert_eq!(strip_quotes("\"大島\""), "大島");
        assert_eq!(strip_quotes("大島"), "大島");
        assert_eq!(requote("大島"), "\"大島\"");
    }
}
