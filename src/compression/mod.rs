//! The compression module manages both directions of the huffzip pipeline.
//!
//! Compression happens in the following steps:
//! - Frequency counting: one pass over the input, counting every byte value
//!   plus a single pseudo-EOF occurrence.
//! - Tree building: the greedy two-minimum combine over the counts.
//! - Code table: one walk of the tree, recording each leaf's path.
//! - Output: the 32 bit magic number, the serialized tree, then a second pass
//!   over the input emitting each byte's code, the pseudo-EOF code, and zero
//!   padding to the final byte boundary.
//!
//! Decompression is the inverse: check the magic number, rebuild the tree
//! from the header, then walk the tree bit by bit emitting bytes until the
//! pseudo-EOF leaf is reached.

pub mod compress;
pub mod decompress;
