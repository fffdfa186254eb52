//! Derives the per-symbol bit codes from the coding tree.

use super::huffman::{Node, NodeData};
use super::ALPH_SIZE;

/// One variable-length code: the leaf's root-to-leaf path.
///
/// Stored as a bit count plus the path bits right-aligned in a u64, never as
/// text. Leading zeros are significant, so the length is authoritative and the
/// bits alone are not. u64 covers the worst case: with u32 weights the
/// deepest reachable leaf sits at depth 46 (Fibonacci-weight bound), well
/// under 57, which is the most the bit queue accepts in one write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub length: u8,
    pub bits: u64,
}

impl Code {
    /// The empty path. This is the code of a root that is itself a leaf;
    /// writing it emits zero bits.
    pub const EMPTY: Code = Code { length: 0, bits: 0 };

    /// This code extended by one branch bit.
    fn push(self, bit: u64) -> Code {
        Code {
            length: self.length + 1,
            bits: self.bits << 1 | bit,
        }
    }
}

/// Walk the tree and return the code for every reachable symbol, indexed by
/// symbol value. Left branches contribute a 0 bit, right branches a 1.
/// Symbols absent from the input have no leaf and stay None. The codes are
/// prefix-free by construction: no leaf lies on the path to another.
pub fn code_table(root: &Node) -> Vec<Option<Code>> {
    let mut codes = vec![None; ALPH_SIZE + 1];
    walk(root, Code::EMPTY, &mut codes);
    codes
}

fn walk(node: &Node, path: Code, codes: &mut [Option<Code>]) {
    match &node.node_data {
        NodeData::Leaf(symbol) => codes[*symbol as usize] = Some(path),
        NodeData::Kids(left, right) => {
            walk(left, path.push(0), codes);
            walk(right, path.push(1), codes);
        }
    }
}
