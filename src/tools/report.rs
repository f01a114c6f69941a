use std::io::{self, Write};

use super::cli::HuffOpts;
use crate::compression::analyze::Analysis;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::{MergeTree, NodeData};
use crate::tools::freq_count::FrequencyTable;

const RULE: &str = "-----------------------------";
/// Extra indent per tree level
const TREE_INDENT: usize = 10;
/// Label drawn for internal tree nodes
const INTERNAL_LABEL: &str = "\"\"";

/// List every symbol with its count, in symbol order.
pub fn write_frequencies<W: Write>(out: &mut W, freqs: &FrequencyTable) -> io::Result<()> {
    writeln!(out, "Frequencies:")?;
    for (symbol, count) in freqs.sorted() {
        writeln!(out, "{} => {}", symbol, count)?;
    }
    Ok(())
}

/// Draw the tree on its side: root on the left, right subtree above, left subtree below.
/// Each node prints as `label / weight`.
pub fn write_tree<W: Write>(out: &mut W, tree: Option<&MergeTree>) -> io::Result<()> {
    let tree = match tree {
        Some(tree) => tree,
        None => return Ok(()),
    };

    // (node, level, kids already queued)
    let mut stack = vec![(tree.root(), 0_usize, false)];
    while let Some((id, level, expanded)) = stack.pop() {
        let node = tree.node(id);
        match &node.node_data {
            NodeData::Kids(left, right) if !expanded => {
                stack.push((*left, level + 1, false));
                stack.push((id, level, true));
                stack.push((*right, level + 1, false));
            }
            NodeData::Kids(..) => {
                writeln!(
                    out,
                    "{:indent$}{} / {}",
                    "",
                    INTERNAL_LABEL,
                    node.weight,
                    indent = level * TREE_INDENT
                )?;
            }
            NodeData::Leaf(symbol) => {
                writeln!(
                    out,
                    "{:indent$}{} / {}",
                    "",
                    symbol,
                    node.weight,
                    indent = level * TREE_INDENT
                )?;
            }
        }
    }
    Ok(())
}

/// List every symbol with its code word, in symbol order.
pub fn write_codes<W: Write>(out: &mut W, codes: &CodeTable) -> io::Result<()> {
    writeln!(out, "Codes:")?;
    for (symbol, code) in codes.sorted() {
        writeln!(out, "{} => {}", symbol, code)?;
    }
    Ok(())
}

pub fn write_total<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(out, "Total Size:")?;
    writeln!(out, "{} bits", analysis.total_bits)?;
    writeln!(
        out,
        "({} bits unencoded, {:.2}%)",
        analysis.raw_bits(),
        analysis.ratio() * 100.0
    )
}

/// Write all sections the options ask for, separated by a rule.
pub fn write_report<W: Write>(out: &mut W, opts: &HuffOpts, analysis: &Analysis) -> io::Result<()> {
    if opts.show_freqs {
        write_frequencies(out, &analysis.freqs)?;
        writeln!(out, "\n{}\n", RULE)?;
    }
    if opts.show_tree {
        writeln!(out, "Binary Tree Vertically\n")?;
        write_tree(out, analysis.tree.as_ref())?;
        writeln!(out, "\n{}\n", RULE)?;
    }
    if opts.show_codes {
        write_codes(out, &analysis.codes)?;
        writeln!(out, "\n{}\n", RULE)?;
    }
    write_total(out, analysis)?;
    writeln!(out, "\n{}", RULE)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::analyze::analyze;
    use std::num::NonZeroUsize;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn frequencies_test() {
        let a = analyze(b"AAAB", NonZeroUsize::MIN).unwrap();
        let text = render(|o| write_frequencies(o, &a.freqs));
        assert_eq!(text, "Frequencies:\nA => 3\nB => 1\n");
    }

    #[test]
    fn codes_test() {
        let a = analyze(b"AAAB", NonZeroUsize::MIN).unwrap();
        let text = render(|o| write_codes(o, &a.codes));
        assert_eq!(text, "Codes:\nA => 1\nB => 0\n");
    }

    #[test]
    fn tree_test() {
        let a = analyze(b"AAAB", NonZeroUsize::MIN).unwrap();
        let text = render(|o| write_tree(o, a.tree.as_ref()));
        let expected = format!("{:10}A / 3\n\"\" / 4\n{:10}B / 1\n", "", "");
        assert_eq!(text, expected);
    }

    #[test]
    fn lone_leaf_tree_test() {
        let a = analyze(b"\n\n", NonZeroUsize::MIN).unwrap();
        let text = render(|o| write_tree(o, a.tree.as_ref()));
        assert_eq!(text, "\\n / 2\n");
    }

    #[test]
    fn empty_report_test() {
        let a = analyze(b"", NonZeroUsize::MIN).unwrap();
        let opts = HuffOpts::new();
        let text = render(|o| write_report(o, &opts, &a));
        assert!(text.starts_with("Frequencies:\n\n"));
        assert!(text.contains("Total Size:\n0 bits\n"));
    }

    #[test]
    fn toggles_test() {
        let a = analyze(b"abc", NonZeroUsize::MIN).unwrap();
        let opts = HuffOpts {
            show_freqs: false,
            show_tree: false,
            show_codes: false,
            ..HuffOpts::new()
        };
        let text = render(|o| write_report(o, &opts, &a));
        assert!(text.starts_with("Total Size:\n5 bits\n"));
        assert!(!text.contains("Codes:"));
    }
}
