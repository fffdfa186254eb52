//! The coding tree and the greedy algorithm that builds it from counts.
//!
//! A node is either a leaf holding a symbol or an internal node owning exactly
//! two children. The enum makes single-child nodes unrepresentable, so the
//! decoder never needs a null check while walking the tree.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One node of the Huffman tree, leaf or internal.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u16),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Aggregate frequency. Only used while building; a tree rebuilt from the
    /// header carries zero weights.
    pub weight: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a leaf node for one symbol.
    pub fn leaf(symbol: u16, weight: u32) -> Node {
        Node {
            weight,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Create an internal node owning two children. Weight is the sum of the
    /// children's weights.
    pub fn kids(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

/// Heap entry. Ordered by weight, ties broken by insertion sequence so the
/// same counts always produce the same tree.
#[derive(Eq, PartialEq, Debug)]
struct Queued {
    weight: u32,
    seq: u32,
    node: Node,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the coding tree from a frequency table.
///
/// One leaf is made per symbol with a positive count, inserted in ascending
/// symbol order. The two lightest nodes are repeatedly combined under a new
/// internal node until a single root remains. With the pseudo-EOF count
/// forced to 1 the table is never all zero; an empty input leaves exactly one
/// leaf, and that leaf is returned as a root with no combine step run.
pub fn tree_from_freqs(freqs: &[u32]) -> Node {
    let mut heap = BinaryHeap::new();
    let mut seq = 0_u32;
    for (symbol, &weight) in freqs.iter().enumerate() {
        if weight > 0 {
            heap.push(Reverse(Queued {
                weight,
                seq,
                node: Node::leaf(symbol as u16, weight),
            }));
            seq += 1;
        }
    }

    loop {
        let Reverse(first) = heap
            .pop()
            .expect("frequency table always holds the pseudo-EOF count");
        match heap.pop() {
            None => return first.node,
            Some(Reverse(second)) => {
                let node = Node::kids(first.node, second.node);
                heap.push(Reverse(Queued {
                    weight: node.weight,
                    seq,
                    node,
                }));
                seq += 1;
            }
        }
    }
}
