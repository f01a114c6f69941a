//! Huffman code table and encoded size calculator.
//!
//! Given a sequence of bytes, splits it into fixed width symbols, counts them,
//! builds a Huffman tree by repeatedly merging the two lightest nodes, reads a
//! prefix free code word for every symbol off the tree, and reports how many
//! bits the input would take under that code.
//!
//! No compressed bitstream is written or read. This is a sizing tool.
//!
//! Basic usage:
//!
//! `$> huffsize -k 1 input.txt`
//!
//! As a library:
//!
//! ```
//! use std::num::NonZeroUsize;
//! use huffsize::{build_tree, compressed_size, freqs, generate_codes};
//!
//! let f = freqs(b"AAAB", NonZeroUsize::MIN);
//! let tree = build_tree(&f).unwrap();
//! let codes = generate_codes(tree.as_ref());
//! assert_eq!(compressed_size(&f, &codes).unwrap(), 4);
//! ```
//!
#![warn(rust_2018_idioms)]
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::analyze::{analyze, Analysis};
pub use error::{Error, Result};
pub use huffman_coding::code_table::{generate_codes, CodeTable};
pub use huffman_coding::huffman::{build_tree, MergeTree, Node, NodeData, NodeId};
pub use huffman_coding::size::compressed_size;
pub use tools::freq_count::{freqs, FrequencyTable, Symbol};
