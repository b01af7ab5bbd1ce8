//! Query tokenization, scoring, and ranking.

pub mod engine;

pub use engine::{SearchHit, search};
