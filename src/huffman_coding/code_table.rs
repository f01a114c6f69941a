//! Walk a merge tree and hand out a code word to every leaf.
//!
//! Going left appends a '0', going right appends a '1'. The walk uses an explicit
//! stack since very skewed frequencies can make the tree as deep as the alphabet is wide.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::huffman::{MergeTree, NodeData};
use crate::tools::freq_count::Symbol;

/// Code word given to the only symbol of a one symbol alphabet.
pub const LONE_SYMBOL_CODE: &str = "0";

/// Symbol to code word ("0"/"1" string) mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<Symbol, String>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &str)> {
        self.codes.iter().map(|(s, c)| (s, c.as_str()))
    }

    /// Entries sorted by symbol bytes, for display.
    pub fn sorted(&self) -> Vec<(&Symbol, &str)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// True when no code word is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let mut words = self.codes.values().map(String::as_str).collect::<Vec<_>>();
        // After sorting, a prefix always sits right before some word it prefixes.
        words.sort_unstable();
        words.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}

impl FromIterator<(Symbol, String)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, String)>>(iter: I) -> Self {
        CodeTable {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Generate the code table for a tree. No tree gives an empty table.
pub fn generate_codes(tree: Option<&MergeTree>) -> CodeTable {
    let mut table = CodeTable::new();
    let tree = match tree {
        Some(tree) => tree,
        None => return table,
    };

    let mut stack = vec![(tree.root(), String::new())];
    while let Some((id, path)) = stack.pop() {
        match &tree.node(id).node_data {
            NodeData::Kids(left, right) => {
                let mut right_path = path.clone();
                right_path.push('1');
                let mut left_path = path;
                left_path.push('0');
                // push right first so the left branch is walked first
                stack.push((*right, right_path));
                stack.push((*left, left_path));
            }
            NodeData::Leaf(symbol) => {
                let code = if path.is_empty() {
                    LONE_SYMBOL_CODE.to_string()
                } else {
                    path
                };
                trace!("{} => {}", symbol, code);
                table.codes.insert(symbol.clone(), code);
            }
        }
    }

    debug!("Generated {} code words", table.len());
    table
}
