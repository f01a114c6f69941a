use std::borrow::Borrow;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

use log::debug;
use rustc_hash::FxHashMap;

/// One alphabet unit: a fixed width chunk of the input bytes.
/// The last chunk of an input may be shorter than the chunk size.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Debug, Clone)]
pub struct Symbol(Vec<u8>);

impl Symbol {
    pub fn new(bytes: &[u8]) -> Symbol {
        Symbol(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Lets the counting loop probe the map with a borrowed chunk.
impl Borrow<[u8]> for Symbol {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Symbol {
    fn from(bytes: &[u8]) -> Self {
        Symbol::new(bytes)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s.as_bytes())
    }
}

impl Display for Symbol {
    /// Printable ascii as is, everything else escaped (\n, \x00, ...)
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for &byte in &self.0 {
            write!(f, "{}", std::ascii::escape_default(byte))?;
        }
        Ok(())
    }
}

/// Count of every distinct symbol seen in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<Symbol, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for this chunk, inserting it with 1 on first sight.
    pub fn add(&mut self, chunk: &[u8]) {
        match self.counts.get_mut(chunk) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(Symbol::new(chunk), 1);
            }
        }
    }

    pub fn get(&self, symbol: &Symbol) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of chunks in the input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Unordered iteration over (symbol, count).
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, u64)> {
        self.counts.iter().map(|(s, &c)| (s, c))
    }

    /// All entries sorted by symbol bytes. This is the order leaves enter the merge queue.
    pub fn sorted(&self) -> Vec<(&Symbol, u64)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(Symbol, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, u64)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (symbol, count) in iter {
            *table.counts.entry(symbol).or_insert(0) += count;
        }
        table
    }
}

/// Returns a frequency count of the input data, taken `chunk_size` bytes at a time.
/// A trailing partial chunk counts as its own symbol.
pub fn freqs(data: &[u8], chunk_size: NonZeroUsize) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    data.chunks(chunk_size.get())
        .for_each(|chunk| table.add(chunk));

    debug!(
        "Counted {} bytes in chunks of {}: {} distinct symbols",
        data.len(),
        chunk_size,
        table.len()
    );
    table
}
