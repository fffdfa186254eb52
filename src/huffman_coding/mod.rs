//! The huffman_coding module builds everything the compressed format is made
//! of: the per-symbol frequency counts, the coding tree, the code table
//! derived from it, and the bit-level tree header that lets the decoder
//! rebuild the exact same tree.
//!
//! huffzip uses a single static Huffman tree per file. The alphabet is the 256
//! byte values plus one pseudo end-of-file symbol, which is counted exactly
//! once and whose code is written last so the decoder knows where the payload
//! stops without any stored length.
//!
//! Decoding the huffman data happens in the decompress function.

pub mod code_table;
pub mod freq_count;
pub mod header;
pub mod huffman;

/// Bits in one input symbol.
pub const BITS_PER_WORD: usize = 8;
/// Bits in the magic number word.
pub const BITS_PER_INT: usize = 32;
/// Number of real byte values.
pub const ALPH_SIZE: usize = 1 << BITS_PER_WORD;
/// The out-of-band end-of-stream symbol. Needs BITS_PER_WORD + 1 bits on the
/// wire, which is why tree-header leaves are 9 bits wide.
pub const PSEUDO_EOF: usize = ALPH_SIZE;

/// Base magic number of the huff family of formats.
pub const HUFF_NUMBER: u32 = 0xface8200;
/// Magic number of the tree-header format this crate writes.
pub const HUFF_TREE: u32 = HUFF_NUMBER | 1;
