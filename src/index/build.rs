use crate::index::types::TokenIndex;
use crate::record::{Record, RecordPos, RecordStore, SchemaConfig};
use crate::utils::bigrams;
use rayon::prelude::*;

/// Build the bi-gram index over a record store.
///
/// Every indexable field of every record is quote-stripped, tokenized, and
/// each token's posting set receives the record's position. Records are
/// processed in parallel chunks; per-chunk maps are merged in a reduce step
/// so concurrent hits on the same token never race. Set semantics make
/// insertion idempotent, so the final index is identical regardless of chunk
/// boundaries or merge order.
pub fn build_index(records: &RecordStore, schema: &SchemaConfig) -> TokenIndex {
    records
        .records()
        .par_iter()
        .enumerate()
        .fold(TokenIndex::new, |mut index, (pos, record)| {
            add_record(&mut index, pos as RecordPos, record, schema);
            index
        })
        .reduce(TokenIndex::new, merge_indexes)
}

/// Tokenize one record's indexable fields into the index
fn add_record(index: &mut TokenIndex, pos: RecordPos, record: &Record, schema: &SchemaConfig) {
    for field_text in record.indexable_text(schema) {
        for token in bigrams(&field_text) {
            index.entry(token).or_default().insert(pos);
        }
    }
}

/// Merge two partial indexes, unioning posting sets token by token
fn merge_indexes(mut left: TokenIndex, right: TokenIndex) -> TokenIndex {
    for (token, postings) in right {
        match left.get_mut(&token) {
            Some(existing) => existing.extend(postings),
            None => {
                left.insert(token, postings);
            }
        }
    }
    left
}
