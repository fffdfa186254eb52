//! Huffman-tree file compression.
//!
//! Provides lossless compression and decompression of files using a single
//! static Huffman tree per file. The compressed stream is self describing: a
//! 32 bit magic number, a bit-packed pre-order serialization of the coding
//! tree, the variable-length codes for every input byte, and one pseudo-EOF
//! code marking where decoding stops.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.huf.
//! The original file will be deleted (pass -k to keep it).
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;
