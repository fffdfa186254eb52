use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info, trace};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::Result;
use crate::huffman_coding::code_table::code_table;
use crate::huffman_coding::freq_count::freqs;
use crate::huffman_coding::header::write_tree;
use crate::huffman_coding::huffman::tree_from_freqs;
use crate::huffman_coding::{BITS_PER_INT, HUFF_TREE, PSEUDO_EOF};

use crate::tools::cli::{HuffOpts, Output};

/// Extension added to the input file name to form the output file name.
pub const SUFFIX: &str = ".huf";

/// Encode everything the reader holds onto the writer.
///
/// Two passes over the input: the first builds the frequency table, then the
/// reader is rewound and the second emits one code per byte. The stream is
/// the 32 bit magic number, the tree header, the payload codes, the
/// pseudo-EOF code, and zero padding to the byte boundary. The write queue is
/// flushed before returning on every path.
pub fn compress_stream(br: &mut BitReader, bw: &mut BitWriter) {
    let freqs = freqs(br);
    let root = tree_from_freqs(&freqs);
    let codes = code_table(&root);
    debug!(
        "Built coding tree with {} leaves.",
        codes.iter().flatten().count()
    );

    bw.out_bits(BITS_PER_INT as u8, HUFF_TREE as u64);
    write_tree(&root, bw);
    trace!("Tree header written, output at {}.", bw.loc());

    br.reset();
    while let Some(byte) = br.byte() {
        // Every byte was counted in the first pass, so it has a leaf. A
        // zero-length code (single-leaf tree) writes no bits at all.
        let code = codes[byte as usize].expect("counted symbol must have a code");
        bw.out_bits(code.length, code.bits);
    }
    let eof = codes[PSEUDO_EOF].expect("pseudo-EOF always has a code");
    bw.out_bits(eof.length, eof.bits);
    bw.flush();
}

/// Compress the input file named in opts (HuffOpts).
pub fn compress(opts: &HuffOpts) -> Result<()> {
    let mut br = BitReader::from_source(File::open(&opts.file)?)?;
    let in_size = fs::metadata(&opts.file)?.len();

    // Worst case output is the tree header plus nine bits per input byte,
    // but a sane starting capacity is the input size.
    let mut bw = BitWriter::new(in_size as usize + 64);
    compress_stream(&mut br, &mut bw);

    match opts.output {
        Output::Stdout => io::stdout().write_all(&bw.output)?,
        Output::File => {
            let mut fname = opts.file.clone();
            fname.push_str(SUFFIX);
            if !opts.force_overwrite && Path::new(&fname).exists() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} exists; use --force to overwrite", fname),
                )
                .into());
            }
            let mut f_out = File::create(&fname)?;
            f_out.write_all(&bw.output)?;
        }
    }

    info!(
        "Compressed {} bytes to {} bytes ({:.1}% of original).",
        in_size,
        bw.output.len(),
        bw.output.len() as f64 * 100.0 / (in_size as f64).max(1.0)
    );

    if !opts.keep_input_files {
        fs::remove_file(&opts.file)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn compressed(input: &[u8]) -> Vec<u8> {
        let mut br = BitReader::new(input.to_vec());
        let mut bw = BitWriter::new(64);
        compress_stream(&mut br, &mut bw);
        bw.output
    }

    #[test]
    fn empty_input_test() {
        // Magic number (32 bits) plus a single-leaf header (1 + 9 bits) plus a
        // zero-length pseudo-EOF code: exactly six bytes after padding.
        let out = compressed(&[]);
        assert_eq!(out, vec![0xfa, 0xce, 0x82, 0x01, 0b1100_0000, 0x00]);
    }

    #[test]
    fn magic_number_first_test() {
        let out = compressed("hello".as_bytes());
        assert_eq!(&out[..4], &[0xfa, 0xce, 0x82, 0x01]);
    }

    #[test]
    fn single_repeated_byte_test() {
        // Two leaves means one bit per payload byte: 32 magic + 21 header +
        // 1000 payload + 1 pseudo-EOF = 1054 bits, padded to 132 bytes.
        let out = compressed(&[0x41; 1000]);
        assert_eq!(out.len(), 132);
    }

    #[test]
    fn determinism_test() {
        let input = "so it goes, so it goes, so it goes".as_bytes();
        assert_eq!(compressed(input), compressed(input));
    }
}
