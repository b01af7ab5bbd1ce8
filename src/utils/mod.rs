//! Shared utilities.
//!
//! - [`bigram`] - 2-character window extraction for indexing and queries

pub mod bigram;

pub use bigram::*;
