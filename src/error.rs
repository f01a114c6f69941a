//! Error types for the huffman size tool.
//!
//! Only `Io` is a user facing failure. The remaining variants mean two pipeline
//! stages disagree about the alphabet, which is a bug rather than bad input.

use thiserror::Error;

use crate::tools::freq_count::Symbol;

/// Error variants for the frequency/tree/code pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The merge loop asked for two nodes but the queue held fewer.
    #[error("priority queue exhausted mid-merge ({remaining} node(s) left)")]
    QueueExhausted { remaining: usize },

    /// A symbol from the frequency table has no code word.
    #[error("no code word for symbol {0}")]
    MissingCode(Symbol),

    /// A code word of length zero reached the estimator.
    #[error("empty code word for symbol {0}")]
    EmptyCode(Symbol),
}

/// A specialized Result type for the pipeline.
pub type Result<T> = std::result::Result<T, Error>;
