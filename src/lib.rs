//! # ADIX - Bi-gram Address Search
//!
//! ADIX builds a bi-gram inverted index over a flat-file address dataset
//! (the JP postal `KEN_ALL` layout by default) and answers free-text
//! substring queries by ranking records on token-overlap counts.
//!
//! ## Architecture
//!
//! - [`record`] - Positional schema, row parsing, multi-line record reassembly
//! - [`index`] - Bi-gram index construction and its on-disk CSV format
//! - [`query`] - Query tokenization, hit counting, deterministic ranking
//! - [`searcher`] - Facade tying dataset, index, and queries together
//! - [`output`] - Terminal and JSON result formatting
//! - [`utils`] - Bi-gram window extraction
//!
//! ## Quick Start
//!
//! ```no_run
//! use adix::searcher::Searcher;
//! use std::path::Path;
//!
//! let searcher = Searcher::initialize(Path::new("KEN_ALL.CSV")).unwrap();
//! for hit in searcher.search("東京") {
//!     println!("{:>3}  {}", hit.score, hit.record.text());
//! }
//! ```
//!
//! The record store and token index are built once and read-only afterwards;
//! searches share them without locking.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod record;
pub mod searcher;
pub mod utils;
