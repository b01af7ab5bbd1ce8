//! On-disk format for the token index.
//!
//! One line per token: `token,pos1,pos2,...` with positions ascending.
//! Tokens are written in lexicographic order, so saving the same index twice
//! produces byte-identical files.

use crate::error::{AdixError, Result};
use crate::index::types::TokenIndex;
use crate::record::RecordPos;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the dataset's file stem to name its index file
const INDEX_SUFFIX: &str = "_index.csv";

/// Derive the index file path for a dataset: a sibling file named after the
/// dataset's stem, e.g. `KEN_ALL.CSV` -> `KEN_ALL_index.csv`.
pub fn index_path_for(dataset: &Path) -> PathBuf {
    let stem = dataset
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    dataset.with_file_name(format!("{stem}{INDEX_SUFFIX}"))
}

/// Serialize the index. Postings iterate ascending out of the set, so the
/// on-disk order is canonical without any extra sorting.
pub fn save(index: &TokenIndex, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| AdixError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for (token, postings) in index {
        write!(writer, "{token}").map_err(|e| AdixError::io(path, e))?;
        for pos in postings {
            write!(writer, ",{pos}").map_err(|e| AdixError::io(path, e))?;
        }
        writeln!(writer).map_err(|e| AdixError::io(path, e))?;
    }

    writer.flush().map_err(|e| AdixError::io(path, e))
}

/// Deserialize an index file.
///
/// Each line must split into a token plus at least one non-negative integer
/// position; anything else is a parse failure. Postings are reconstructed as
/// sets, so load accepts any serialized order even though save always emits
/// ascending.
pub fn load(path: &Path) -> Result<TokenIndex> {
    let file = File::open(path).map_err(|e| AdixError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut index = TokenIndex::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AdixError::io(path, e))?;
        if line.is_empty() {
            continue;
        }
        let (token, postings) = parse_line(&line, idx + 1)?;
        index.entry(token).or_default().extend(postings);
    }
    Ok(index)
}

fn parse_line(line: &str, line_no: usize) -> Result<(String, Vec<RecordPos>)> {
    let mut parts = line.split(',');
    let token = parts.next().unwrap_or_default();
    if token.is_empty() {
        return Err(AdixError::MalformedIndexEntry {
            line: line_no,
            reason: "empty token".to_string(),
        });
    }

    let postings = parts
        .map(|p| {
            p.parse::<RecordPos>()
                .map_err(|_| AdixError::MalformedIndexEntry {
                    line: line_no,
                    reason: format!("invalid position {p:?}"),
                })
        })
        .collect::<Result<Vec<RecordPos>>>()?;

    if postings.is_empty() {
        return Err(AdixError::MalformedIndexEntry {
            line: line_no,
            reason: "token has no positions".to_string(),
        });
    }

    Ok((token.to_string(), postings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("adix_store_{}_{name}", std::process::id()))
    }

    fn sample_index() -> TokenIndex {
        let mut index = TokenIndex::new();
        index.entry("東京".to_string()).or_default().extend([2, 0, 1]);
        index.entry("京都".to_string()).or_default().insert(0);
        index.entry("ab".to_string()).or_default().extend([41, 7]);
        index
    }

    #[test]
    fn test_index_path_derivation() {
        assert_eq!(
            index_path_for(Path::new("/data/KEN_ALL.CSV")),
            PathBuf::from("/data/KEN_ALL_index.csv")
        );
        assert_eq!(
            index_path_for(Path::new("addresses.csv")),
            PathBuf::from("addresses_index.csv")
        );
    }

    #[test]
    fn test_save_emits_ascending_positions() {
        let path = temp_path("ascending.csv");
        save(&sample_index(), &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        // Tokens lexicographic, positions ascending
        assert_eq!(content, "ab,7,41\n京都,0\n東京,0,1,2\n");
    }

    #[test]
    fn test_roundtrip() {
        let path = temp_path("roundtrip.csv");
        let index = sample_index();
        save(&index, &path).unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, index);
    }

    #[test]
    fn test_load_accepts_unsorted_postings() {
        let path = temp_path("unsorted.csv");
        fs::write(&path, "東京,5,1,3\n").unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let positions: Vec<RecordPos> = loaded["東京"].iter().copied().collect();
        assert_eq!(positions, vec![1, 3, 5]);
    }

    #[test]
    fn test_load_rejects_missing_positions() {
        let path = temp_path("nopos.csv");
        fs::write(&path, "東京\n").unwrap();
        let err = load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.is_parse());
    }

    #[test]
    fn test_load_rejects_bad_position() {
        let path = temp_path("badpos.csv");
        fs::write(&path, "東京,1\n京都,x\n").unwrap();
        let err = load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/adix_index.csv")).unwrap_err();
        assert!(!err.is_parse());
    }
}
