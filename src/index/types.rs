use crate::record::RecordPos;
use std::collections::{BTreeMap, BTreeSet};

/// Inverted index: bi-gram token -> set of record positions.
///
/// `BTreeMap`/`BTreeSet` keep both tokens and postings in ascending order, so
/// the canonical on-disk ordering falls out of iteration with no extra sort
/// and two indexes with equal contents compare equal directly.
pub type TokenIndex = BTreeMap<String, BTreeSet<RecordPos>>;

/// Total number of postings across all tokens
pub fn postings_count(index: &TokenIndex) -> usize {
    index.values().map(BTreeSet::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postings_count() {
        let mut index = TokenIndex::new();
        index.entry("東京".to_string()).or_default().extend([0, 1, 2]);
        index.entry("京都".to_string()).or_default().insert(0);
        assert_eq!(postings_count(&index), 4);
    }
}
