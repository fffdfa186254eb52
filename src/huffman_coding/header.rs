//! Serializes the coding tree into the compressed stream's header and
//! rebuilds it on the way out.
//!
//! The format is a pre-order walk: a 0 bit announces an internal node and is
//! followed by its left then right subtree; a 1 bit announces a leaf and is
//! followed by the symbol value in 9 bits (pseudo-EOF is 256, one past the
//! 8 bit range). Shape plus leaf values reconstruct the tree exactly; weights
//! are not written because decoding never consults them.
//!
//! Recursion depth is bounded by the leaf count (at most 257), so the stack
//! is not a concern.

use log::trace;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{HuffError, Result};

use super::huffman::{Node, NodeData};
use super::{BITS_PER_WORD, PSEUDO_EOF};

/// Write the tree header onto the bitstream.
pub fn write_tree(node: &Node, bw: &mut BitWriter) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            bw.out_bits(1, 0);
            write_tree(left, bw);
            write_tree(right, bw);
        }
        NodeData::Leaf(symbol) => {
            bw.out_bits(1, 1);
            bw.out_bits((BITS_PER_WORD + 1) as u8, *symbol as u64);
        }
    }
}

/// Rebuild the tree from the bitstream.
///
/// Running out of bits mid-traversal means the header was truncated. A leaf
/// value above pseudo-EOF can only come from corrupt input (the writer never
/// produces one) and is rejected rather than decoded into garbage bytes.
pub fn read_tree(br: &mut BitReader) -> Result<Node> {
    match br.bit() {
        None => Err(HuffError::TruncatedHeader),
        Some(0) => {
            let left = read_tree(br)?;
            let right = read_tree(br)?;
            Ok(Node::kids(left, right))
        }
        Some(_) => {
            let value = br
                .bint(BITS_PER_WORD + 1)
                .ok_or(HuffError::TruncatedHeader)?;
            if value > PSEUDO_EOF {
                trace!("Rejecting tree leaf with out-of-range value {}", value);
                return Err(HuffError::MalformedTree);
            }
            Ok(Node::leaf(value as u16, 0))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::tree_from_freqs;
    use crate::huffman_coding::ALPH_SIZE;

    fn round_trip(root: &Node) -> Node {
        let mut bw = BitWriter::new(64);
        write_tree(root, &mut bw);
        bw.flush();
        let mut br = BitReader::new(bw.output);
        read_tree(&mut br).expect("tree should round-trip")
    }

    /// Shape and leaf values must survive; weights are not carried.
    fn same_shape(a: &Node, b: &Node) -> bool {
        match (&a.node_data, &b.node_data) {
            (NodeData::Leaf(x), NodeData::Leaf(y)) => x == y,
            (NodeData::Kids(al, ar), NodeData::Kids(bl, br)) => {
                same_shape(al, bl) && same_shape(ar, br)
            }
            _ => false,
        }
    }

    fn tree_for(input: &[u8]) -> Node {
        let mut freqs = vec![0_u32; ALPH_SIZE + 1];
        for &byte in input {
            freqs[byte as usize] += 1;
        }
        freqs[PSEUDO_EOF] = 1;
        tree_from_freqs(&freqs)
    }

    #[test]
    fn single_leaf_header_test() {
        // Leaf marker plus 9 bit value 256: 1_100000000, zero padded.
        let root = Node::leaf(PSEUDO_EOF as u16, 0);
        let mut bw = BitWriter::new(8);
        write_tree(&root, &mut bw);
        bw.flush();
        assert_eq!(bw.output, vec![0b1100_0000, 0b0000_0000]);
        assert!(same_shape(&root, &round_trip(&root)));
    }

    #[test]
    fn round_trip_test() {
        let root = tree_for("abracadabra".as_bytes());
        assert!(same_shape(&root, &round_trip(&root)));
    }

    #[test]
    fn round_trip_full_alphabet_test() {
        let input: Vec<u8> = (0..=255).collect();
        let root = tree_for(&input);
        assert!(same_shape(&root, &round_trip(&root)));
    }

    #[test]
    fn truncated_header_test() {
        let root = tree_for("hello world".as_bytes());
        let mut bw = BitWriter::new(64);
        write_tree(&root, &mut bw);
        bw.flush();
        let truncated = bw.output[..2].to_vec();
        let mut br = BitReader::new(truncated);
        assert!(matches!(
            read_tree(&mut br),
            Err(HuffError::TruncatedHeader)
        ));
    }

    #[test]
    fn empty_header_test() {
        let mut br = BitReader::new(vec![]);
        assert!(matches!(
            read_tree(&mut br),
            Err(HuffError::TruncatedHeader)
        ));
    }

    #[test]
    fn out_of_range_leaf_test() {
        // Leaf claiming symbol 257: 1 then 100000001.
        let mut bw = BitWriter::new(8);
        bw.out_bits(1, 1);
        bw.out_bits(9, 257);
        bw.flush();
        let mut br = BitReader::new(bw.output);
        assert!(matches!(read_tree(&mut br), Err(HuffError::MalformedTree)));
    }
}
