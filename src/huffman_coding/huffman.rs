use log::{debug, trace};

use crate::error::{Error, Result};
use crate::tools::freq_count::{FrequencyTable, Symbol};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Index of a node inside its MergeTree.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct NodeId(usize);

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(NodeId, NodeId),
    Leaf(Symbol),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, node_data: NodeData) -> Node {
        Node { weight, node_data }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

/// The huffman tree. All nodes live in one vec and refer to their kids by index,
/// so the tree is dropped as a unit and no node can outlive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl MergeTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total weight, which is the sum of all leaf frequencies.
    pub fn weight(&self) -> u64 {
        self.node(self.root).weight
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// Longest root to leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0_usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.node(id).node_data {
                NodeData::Kids(left, right) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                NodeData::Leaf(_) => deepest = deepest.max(depth),
            }
        }
        deepest
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}

/// Merge queue entry. Ordered by weight, then by when it entered the queue,
/// so equal weights come out oldest first.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
struct Candidate {
    weight: u64,
    seq: u64,
    id: NodeId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of candidates that stamps each push with the next sequence number.
struct MergeQueue {
    heap: BinaryHeap<Reverse<Candidate>>,
    next_seq: u64,
}

impl MergeQueue {
    fn with_capacity(capacity: usize) -> Self {
        MergeQueue {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    fn push(&mut self, weight: u64, id: NodeId) {
        self.heap.push(Reverse(Candidate {
            weight,
            seq: self.next_seq,
            id,
        }));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Result<Candidate> {
        self.heap
            .pop()
            .map(|Reverse(c)| c)
            .ok_or(Error::QueueExhausted { remaining: 0 })
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Build the huffman tree from a frequency table.
///
/// Leaves enter the queue in ascending symbol order. The two lightest nodes are
/// merged under a new parent (first popped on the left) until one node remains.
/// Equal weights pop in queue insertion order. Returns None for an empty table.
pub fn build_tree(freqs: &FrequencyTable) -> Result<Option<MergeTree>> {
    let entries = freqs.sorted();
    if entries.is_empty() {
        debug!("No symbols, no tree");
        return Ok(None);
    }

    let mut tree = MergeTree {
        nodes: Vec::with_capacity(entries.len() * 2 - 1),
        root: NodeId(0),
    };
    let mut queue = MergeQueue::with_capacity(entries.len());
    for (symbol, weight) in entries {
        let id = tree.push(Node::new(weight, NodeData::Leaf(symbol.clone())));
        queue.push(weight, id);
    }
    debug!("Building tree from {} leaves", queue.len());

    // A single leaf is its own root; there is nothing to merge it with.
    if queue.len() == 1 {
        tree.root = queue.pop()?.id;
        debug!("Single symbol alphabet, tree is one leaf");
        return Ok(Some(tree));
    }

    loop {
        let left = queue.pop()?;
        let right = queue.pop().map_err(|_| Error::QueueExhausted {
            remaining: 1,
        })?;
        let weight = left.weight + right.weight;
        trace!(
            "Merging {} + {} -> {}",
            left.weight,
            right.weight,
            weight
        );
        let id = tree.push(Node::new(weight, NodeData::Kids(left.id, right.id)));

        if queue.is_empty() {
            tree.root = id;
            break;
        }
        queue.push(weight, id);
    }

    debug!(
        "Tree built: {} nodes, weight {}, depth {}",
        tree.nodes.len(),
        tree.weight(),
        tree.depth()
    );
    Ok(Some(tree))
}
