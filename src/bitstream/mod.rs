//! The bitstream module forms the I/O subsystem for huffzip.
//!
//! Huffman coding produces and consumes data at single-bit granularity, so both
//! sides of the pipeline talk to the byte-oriented world through these two
//! adapters. The reader is backed by a fully buffered copy of the input, which
//! makes the rewind between the frequency-counting pass and the encoding pass a
//! cursor reset rather than a second trip to the file.
//!
//! This I/O subsystem is designed to interface with the other modules within
//! huffzip. It is not intended for more general use.
pub mod bitreader;
pub mod bitwriter;
