//! Collaborator-facing facade: dataset load, index build-or-load, search.

use crate::error::{AdixError, Result};
use crate::index::store::{index_path_for, load, save};
use crate::index::{TokenIndex, build_index};
use crate::query::{SearchHit, search};
use crate::record::{RecordStore, SchemaConfig, normalize};
use std::fs;
use std::path::{Path, PathBuf};

/// An initialized search engine: normalized records plus their token index,
/// both read-only after construction. Queries never mutate state, so a
/// `Searcher` can be shared freely behind an `Arc` by a concurrent front-end.
#[derive(Debug)]
pub struct Searcher {
    schema: SchemaConfig,
    index_path: PathBuf,
    records: RecordStore,
    index: TokenIndex,
}

impl Searcher {
    /// Load the dataset, reassemble split records, and attach the index.
    ///
    /// The sibling index file is loaded when present; a missing index is
    /// built and saved, and a corrupt one is rebuilt in place. The index is
    /// always queried against exactly the record store it was built from.
    pub fn initialize(dataset: &Path) -> Result<Self> {
        Self::with_schema(dataset, SchemaConfig::default())
    }

    pub fn with_schema(dataset: &Path, schema: SchemaConfig) -> Result<Self> {
        let raw = fs::read_to_string(dataset).map_err(|e| AdixError::io(dataset, e))?;
        let records = RecordStore::new(normalize(raw.lines(), &schema)?);

        let index_path = index_path_for(dataset);
        let index = if index_path.exists() {
            match load(&index_path) {
                Ok(index) => index,
                // A corrupt index is rebuilt rather than trusted partially
                Err(e) if e.is_parse() => {
                    eprintln!("warning: {e}; rebuilding index");
                    Self::build_and_save(&records, &schema, &index_path)?
                }
                Err(e) => return Err(e),
            }
        } else {
            Self::build_and_save(&records, &schema, &index_path)?
        };

        Ok(Self {
            schema,
            index_path,
            records,
            index,
        })
    }

    fn build_and_save(
        records: &RecordStore,
        schema: &SchemaConfig,
        index_path: &Path,
    ) -> Result<TokenIndex> {
        let index = build_index(records, schema);
        save(&index, index_path)?;
        Ok(index)
    }

    /// Rank records against a free-text query
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        search(query, &self.index, &self.records)
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn index(&self) -> &TokenIndex {
        &self.index
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn schema(&self) -> &SchemaConfig {
        &self.schema
    }
}
