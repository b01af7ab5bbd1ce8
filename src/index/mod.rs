//! Bi-gram index construction, persistence, and statistics.

pub mod build;
pub mod stats;
pub mod store;
pub mod types;

pub use build::build_index;
pub use types::TokenIndex;
