//! Reassembly of logical records split across physical lines.
//!
//! Some text fields in the source format have a fixed-width limit; entries
//! that overflow it are emitted as several physical lines sharing the same
//! merge key, with a continuation flag set on each fragment. This module
//! groups lines by merge key and concatenates the mergeable fields of each
//! continuation run back into a single logical record.
//!
//! Output order is *first appearance of the merge key in the file*, with the
//! lines of a group kept in file order. This order defines record positions
//! and therefore index correctness, so it is fixed and tested here.

use crate::error::Result;
use crate::record::schema::{SchemaConfig, requote, strip_quotes};
use crate::record::store::Record;
use rustc_hash::FxHashMap;

/// Parse and reassemble raw dataset lines into logical records.
///
/// Any row that fails schema validation fails the whole load; silently
/// dropping address data would corrupt every position after it.
pub fn normalize<I, S>(lines: I, schema: &SchemaConfig) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Group by merge key, remembering first-appearance order of each key
    let mut key_order: Vec<String> = Vec::new();
    let mut groups: FxHashMap<String, Vec<Record>> = FxHashMap::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }
        let record = Record::parse(line, idx + 1, schema)?;
        let key = record.merge_key(schema).to_string();
        match groups.get_mut(&key) {
            Some(group) => group.push(record),
            None => {
                key_order.push(key.clone());
                groups.insert(key, vec![record]);
            }
        }
    }

    let mut out = Vec::with_capacity(key_order.len());
    for key in key_order {
        let group = groups.remove(&key).unwrap_or_default();
        emit_group(group, schema, &mut out);
    }
    Ok(out)
}

/// Emit one merge-key group as logical records.
///
/// A group merges only when its first line carries the "continued" flag code;
/// the merged record covers the leading consecutive run of flagged lines, and
/// any trailing unflagged lines are genuinely separate records that happen to
/// share the key.
fn emit_group(group: Vec<Record>, schema: &SchemaConfig, out: &mut Vec<Record>) {
    if group.len() <= 1 || !group[0].is_continued(schema) {
        out.extend(group);
        return;
    }

    let run_len = group
        .iter()
        .take_while(|r| r.is_continued(schema))
        .count();

    if run_len >= 2 {
        out.push(merge_run(&group[..run_len], schema));
    } else {
        out.push(group[0].clone());
    }
    out.extend(group.into_iter().skip(run_len));
}

/// Merge a continuation run into one record. Mergeable fields concatenate
/// across the run with quotes stripped and exact-duplicate consecutive
/// fragments removed; every other field takes the first line's value.
fn merge_run(run: &[Record], schema: &SchemaConfig) -> Record {
    let mut fields = run[0].fields().to_vec();

    for &field in &schema.mergeable_fields {
        let mut fragments: Vec<String> = run
            .iter()
            .map(|r| strip_quotes(&r.fields()[field]))
            .collect();
        fragments.dedup();
        fields[field] = requote(&fragments.concat());
    }

    Record::from_fields(fields)
}
