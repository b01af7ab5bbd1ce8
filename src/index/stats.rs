use crate::index::types::{TokenIndex, postings_count};
use crate::record::RecordStore;

/// Display index statistics
pub fn show_stats(records: &RecordStore, index: &TokenIndex) {
    println!("Index Statistics");
    println!("================");
    println!();
    println!("Records:          {}", records.len());
    println!("Distinct tokens:  {}", index.len());
    println!("Total postings:   {}", postings_count(index));
    if !index.is_empty() {
        println!(
            "Avg postings:     {:.1}",
            postings_count(index) as f64 / index.len() as f64
        );
    }

    // Most common tokens
    let mut by_freq: Vec<_> = index.iter().map(|(t, p)| (t.as_str(), p.len())).collect();
    by_freq.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    if !by_freq.is_empty() {
        println!();
        println!("Top tokens by postings:");
        for (token, count) in by_freq.iter().take(10) {
            println!("  {:8} {}", token, count);
        }
    }
}
