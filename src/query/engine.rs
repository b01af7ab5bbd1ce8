use crate::index::TokenIndex;
use crate::record::{Record, RecordPos, RecordStore};
use crate::utils::bigrams;
use rustc_hash::FxHashMap;

/// One ranked search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub pos: RecordPos,
    /// Number of query tokens whose posting set contains this record
    pub score: u32,
    pub record: &'a Record,
}

/// Rank records against a free-text query.
///
/// The query is tokenized into bi-grams; each token's posting set contributes
/// one hit to every record position it contains. Results are ordered by hit
/// count descending, with ties broken by ascending position so the output is
/// fully deterministic. Queries shorter than 2 characters, and queries whose
/// tokens all miss the index, return an empty list rather than an error.
pub fn search<'a>(query: &str, index: &TokenIndex, records: &'a RecordStore) -> Vec<SearchHit<'a>> {
    let mut scores: FxHashMap<RecordPos, u32> = FxHashMap::default();

    for token in bigrams(query) {
        let Some(postings) = index.get(&token) else {
            continue;
        };
        for &pos in postings {
            *scores.entry(pos).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(RecordPos, u32)> = scores.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .filter_map(|(pos, score)| {
            records.get(pos).map(|record| SearchHit { pos, score, record })
        })
        .collect()
}
