//! The compression module ties the pipeline stages together.
//!
//! Data flows one way: frequency count, merge tree, code table, encoded size.
//! Each stage owns what it produces and nothing is changed after it is built.
//!
pub mod analyze;
