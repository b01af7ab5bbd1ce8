//! Dataset records: positional schema, parsing, multi-line reassembly.

pub mod normalize;
pub mod schema;
pub mod store;

pub use normalize::normalize;
pub use schema::SchemaConfig;
pub use store::{Record, RecordPos, RecordStore};
