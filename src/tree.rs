//! Huffman tree construction.
//!
//! Leaves are merged greedily, two lowest weights at a time, through a
//! `BinaryHeap` used as a min-priority queue.
//!
//! # Tie-break
//!
//! Equal weights are common (every symbol seen once, for instance), and the
//! choice among them decides the shape of the tree. Each node entering the
//! queue receives a sequence number: leaves are numbered in ascending symbol
//! order, merged nodes continue the count as they are created. The queue
//! orders by `(weight, sequence)`, so among equal weights the node that
//! entered first is popped first and becomes the left child. The same
//! frequency map therefore always produces the same tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::frequency::FrequencyMap;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A symbol and its frequency.
    Leaf {
        /// The symbol this leaf decodes to.
        symbol: S,
        /// Occurrence count of `symbol`.
        freq: u64,
    },
    /// Combined weight of two subtrees.
    Internal {
        /// Subtree reached by a `0` bit.
        left: Box<Node<S>>,
        /// Subtree reached by a `1` bit.
        right: Box<Node<S>>,
        /// Sum of both children's weights.
        freq: u64,
    },
}

impl<S> Node<S> {
    /// Weight of this subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// The symbol, if this is a leaf.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// `(left, right)`, if this is an internal node.
    pub fn children(&self) -> Option<(&Node<S>, &Node<S>)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Self, right: Self) -> Self {
        let freq = left.freq() + right.freq();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Queue entry: a node plus the sequence number it entered the queue with.
struct Pending<S> {
    freq: u64,
    seq: usize,
    node: Node<S>,
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        (self.freq, self.seq) == (other.freq, other.seq)
    }
}

impl<S> Eq for Pending<S> {}

impl<S> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.freq, other.seq).cmp(&(self.freq, self.seq)) // Min-priority queue
    }
}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A complete Huffman tree.
///
/// Every internal node has exactly two children. With a single distinct
/// symbol the root itself is a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

/// Build the Huffman tree for `freqs`.
///
/// # Errors
/// Returns `Error::EmptyAlphabet` if `freqs` holds no symbols.
pub fn build_tree<S: Ord + Clone>(freqs: &FrequencyMap<S>) -> Result<HuffmanTree<S>> {
    let mut pq = BinaryHeap::with_capacity(freqs.len());
    for (seq, (symbol, freq)) in freqs.iter().enumerate() {
        pq.push(Pending {
            freq,
            seq,
            node: Node::Leaf {
                symbol: symbol.clone(),
                freq,
            },
        });
    }

    let mut seq = pq.len();
    loop {
        let first = pq.pop().ok_or(Error::EmptyAlphabet)?;
        let Some(second) = pq.pop() else {
            let tree = HuffmanTree { root: first.node };
            debug!(
                "built huffman tree: {} leaves, depth {}, weight {}",
                tree.leaf_count(),
                tree.depth(),
                tree.frequency()
            );
            return Ok(tree);
        };

        trace!(
            "merge #{} ({}) + #{} ({}) -> #{}",
            first.seq,
            first.freq,
            second.seq,
            second.freq,
            seq
        );
        let node = Node::merge(first.node, second.node);
        pq.push(Pending {
            freq: node.freq(),
            seq,
            node,
        });
        seq += 1;
    }
}

impl<S> HuffmanTree<S> {
    /// The root node.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Root weight, equal to the length of the counted input.
    pub fn frequency(&self) -> u64 {
        self.root.freq()
    }

    /// Number of leaves, one per distinct symbol.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Longest root-to-leaf path in edges; 0 for a single leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Whether the tree is a lone leaf (single distinct symbol).
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }
}

impl<S: fmt::Debug> HuffmanTree<S> {
    fn fmt_node(
        f: &mut fmt::Formatter<'_>,
        node: &Node<S>,
        depth: usize,
        label: &str,
    ) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match node {
            Node::Leaf { symbol, freq } => {
                writeln!(f, "{}{}-> Leaf {:?} [weight: {}]", indent, label, symbol, freq)
            }
            Node::Internal { left, right, freq } => {
                writeln!(f, "{}{}-> Internal [weight: {}]", indent, label, freq)?;
                Self::fmt_node(f, left, depth + 1, "L")?;
                Self::fmt_node(f, right, depth + 1, "R")
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_node(f, &self.root, 0, "root")
    }
}
