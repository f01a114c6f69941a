//! The tools module provides the helpers around the huffman core.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Splits the input into symbols and counts them.
//! - report: Prints frequencies, the tree, codes and the total size.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
