use std::num::NonZeroUsize;

use huffsize::{analyze, build_tree, compressed_size, freqs, generate_codes, Symbol};

fn k(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn single_symbol_pipeline() {
    let a = analyze(b"AAAA", k(1)).unwrap();
    assert_eq!(a.freqs.len(), 1);
    assert_eq!(a.freqs.get(&Symbol::from("A")), Some(4));
    let tree = a.tree.as_ref().unwrap();
    assert!(tree.node(tree.root()).is_leaf());
    assert_eq!(a.codes.get(&Symbol::from("A")), Some("0"));
    assert_eq!(a.total_bits, 4);
}

#[test]
fn two_symbol_pipeline() {
    let a = analyze(b"AAAB", k(1)).unwrap();
    assert_eq!(a.freqs.get(&Symbol::from("A")), Some(3));
    assert_eq!(a.freqs.get(&Symbol::from("B")), Some(1));
    let tree = a.tree.as_ref().unwrap();
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.internal_count(), 1);
    assert!(!tree.node(tree.root()).is_leaf());
    assert_eq!(a.codes.get(&Symbol::from("A")).map(str::len), Some(1));
    assert_eq!(a.codes.get(&Symbol::from("B")).map(str::len), Some(1));
    assert_eq!(a.total_bits, 4);
}

#[test]
fn empty_pipeline() {
    let f = freqs(b"", k(1));
    assert!(f.is_empty());
    let tree = build_tree(&f).unwrap();
    assert!(tree.is_none());
    let codes = generate_codes(tree.as_ref());
    assert!(codes.is_empty());
    assert_eq!(compressed_size(&f, &codes).unwrap(), 0);
}

#[test]
fn even_chunking() {
    let f = freqs(b"abcdef", k(2));
    assert_eq!(f.len(), 3);
    assert_eq!(f.total(), 3);
    assert!(f.iter().all(|(s, _)| s.len() == 2));
}

#[test]
fn short_final_chunk() {
    let f = freqs(b"abcab", k(3));
    assert_eq!(f.total(), 2);
    assert_eq!(f.get(&Symbol::from("abc")), Some(1));
    assert_eq!(f.get(&Symbol::from("ab")), Some(1));

    let a = analyze(b"abcab", k(3)).unwrap();
    assert_eq!(a.codes.len(), 2);
    assert_eq!(a.total_bits, 2);
}

#[test]
fn binary_input() {
    let data = [0u8, 255, 0, 0, 10, 255];
    let a = analyze(&data, k(1)).unwrap();
    // 0:3 255:2 10:1 -> 10 and 255 merge first, 0 pairs with that
    assert_eq!(a.codes.get(&Symbol::new(&[0])), Some("0"));
    assert_eq!(a.total_bits, 3 + 2 * 2 + 2);
}

#[test]
fn repeated_runs_agree() {
    let data = b"it was the best of times, it was the worst of times";
    let first = analyze(data, k(1)).unwrap();
    let second = analyze(data, k(1)).unwrap();
    assert_eq!(first.codes, second.codes);
    assert_eq!(first.tree, second.tree);
    assert_eq!(first.total_bits, second.total_bits);
}
