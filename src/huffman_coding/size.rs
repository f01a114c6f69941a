use log::{debug, trace};

use super::code_table::CodeTable;
use crate::error::{Error, Result};
use crate::tools::freq_count::FrequencyTable;

/// Total encoded size in bits: the sum of count * code length over every symbol.
///
/// Both tables must come from the same alphabet. A symbol without a (non empty)
/// code word is reported as an error instead of being skipped.
pub fn compressed_size(freqs: &FrequencyTable, codes: &CodeTable) -> Result<u64> {
    let mut total = 0_u64;
    for (symbol, count) in freqs.iter() {
        let code = codes
            .get(symbol)
            .ok_or_else(|| Error::MissingCode(symbol.clone()))?;
        if code.is_empty() {
            return Err(Error::EmptyCode(symbol.clone()));
        }
        let cost = count * code.len() as u64;
        trace!("{}: {} x {} bits = {}", symbol, count, code.len(), cost);
        total += cost;
    }
    debug!("Total encoded size is {} bits", total);
    Ok(total)
}
