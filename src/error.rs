//! Error types for the huffzip compression pipeline.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffError>;

/// Everything that can go wrong while compressing or decompressing.
///
/// None of these are recoverable: each aborts the current call outright,
/// and the caller must not trust any output already produced.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The first 32 bits of the input did not match the compressed-format
    /// marker. Raised before any output is produced.
    #[error("not a huffzip compressed stream: stream starts with 0x{0:08x}")]
    BadMagic(u32),

    /// The input ran out of bits while the tree header was being read.
    #[error("unexpected end of data while reading the tree header")]
    TruncatedHeader,

    /// The input ran out of bits before the end-of-stream code was decoded.
    #[error("unexpected end of data before the end-of-stream code")]
    TruncatedBody,

    /// The rebuilt tree cannot be decoded with: a leaf value above the
    /// pseudo-EOF symbol, or a shape the decoder cannot walk. Possible only
    /// with corrupt input, never with our own output.
    #[error("compressed stream describes a malformed coding tree")]
    MalformedTree,

    /// File-level failure from the underlying streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
