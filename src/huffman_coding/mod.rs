//! The huffman module turns a frequency table into a prefix code and prices it.
//!
//! - huffman: builds the merge tree by repeatedly joining the two lightest nodes.
//! - code_table: walks the tree to give every symbol a code word.
//! - size: adds up count * code length to get the encoded size in bits.
//!
//! The tree shape depends on how ties are broken, so the merge queue orders equal
//! weights by insertion sequence. Leaves are inserted in ascending symbol order,
//! which makes the codes reproducible run to run and platform to platform.
//!

pub mod code_table;
pub mod huffman;
pub mod size;
