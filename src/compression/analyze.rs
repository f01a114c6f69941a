use std::num::NonZeroUsize;

use log::info;

use crate::error::Result;
use crate::huffman_coding::code_table::{generate_codes, CodeTable};
use crate::huffman_coding::huffman::{build_tree, MergeTree};
use crate::huffman_coding::size::compressed_size;
use crate::tools::freq_count::{freqs, FrequencyTable};

/// Everything the pipeline produces for one input.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Number of input bytes
    pub input_len: usize,
    /// Bytes per symbol
    pub chunk_size: NonZeroUsize,
    pub freqs: FrequencyTable,
    /// None when the input was empty
    pub tree: Option<MergeTree>,
    pub codes: CodeTable,
    /// Encoded size in bits
    pub total_bits: u64,
}

impl Analysis {
    /// Size of the input without any coding, in bits.
    pub fn raw_bits(&self) -> u64 {
        self.input_len as u64 * 8
    }

    /// Encoded size as a fraction of the raw size. 0 for empty input.
    pub fn ratio(&self) -> f64 {
        match self.raw_bits() {
            0 => 0.0,
            raw => self.total_bits as f64 / raw as f64,
        }
    }
}

/// Run the whole pipeline over `data`: count, build, generate, estimate.
pub fn analyze(data: &[u8], chunk_size: NonZeroUsize) -> Result<Analysis> {
    let freqs = freqs(data, chunk_size);
    let tree = build_tree(&freqs)?;
    let codes = generate_codes(tree.as_ref());
    let total_bits = compressed_size(&freqs, &codes)?;

    info!(
        "{} symbols, {} distinct, {} bits encoded ({} bits raw)",
        freqs.total(),
        freqs.len(),
        total_bits,
        data.len() * 8
    );

    Ok(Analysis {
        input_len: data.len(),
        chunk_size,
        freqs,
        tree,
        codes,
        total_bits,
    })
}
