use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, error, info};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{HuffError, Result};
use crate::huffman_coding::header::read_tree;
use crate::huffman_coding::huffman::NodeData;
use crate::huffman_coding::{BITS_PER_INT, BITS_PER_WORD, HUFF_TREE, PSEUDO_EOF};

use super::compress::SUFFIX;
use crate::tools::cli::{HuffOpts, Output};

/// Decode one compressed stream from the reader onto the writer.
///
/// Checks the magic number before anything else, rebuilds the tree from the
/// header, then walks the tree one bit at a time: left on 0, right on 1,
/// emitting a byte and restarting at the root on every leaf until the
/// pseudo-EOF leaf ends the stream. Running out of bits anywhere before that
/// is a format error; the padding bits after pseudo-EOF are never read.
pub fn decompress_stream(br: &mut BitReader, bw: &mut BitWriter) -> Result<()> {
    let magic = br.bint(BITS_PER_INT).ok_or(HuffError::TruncatedHeader)? as u32;
    if magic != HUFF_TREE {
        error!("Fatal error: stream starts with 0x{:08x}, not the huffzip magic number.", magic);
        return Err(HuffError::BadMagic(magic));
    }

    let root = read_tree(br)?;
    debug!("Rebuilt coding tree, payload starts at {}.", br.loc());

    // A root that is itself a leaf comes from an empty input, where only
    // pseudo-EOF was counted. Its code is zero bits long, so the payload is
    // empty and there is nothing to walk. Any other lone leaf would decode
    // forever without consuming input, so it is rejected.
    if let NodeData::Leaf(symbol) = &root.node_data {
        if *symbol as usize == PSEUDO_EOF {
            return Ok(());
        }
        return Err(HuffError::MalformedTree);
    }

    let mut current = &root;
    loop {
        let bit = br.bit().ok_or(HuffError::TruncatedBody)?;
        current = match &current.node_data {
            NodeData::Kids(left, right) => {
                if bit == 0 {
                    left.as_ref()
                } else {
                    right.as_ref()
                }
            }
            // Unreachable with a tree from read_tree; kept as a guard so a
            // walk from a leaf can never loop or dereference a missing child.
            NodeData::Leaf(_) => return Err(HuffError::MalformedTree),
        };
        if let NodeData::Leaf(symbol) = &current.node_data {
            if *symbol as usize == PSEUDO_EOF {
                return Ok(());
            }
            bw.out_bits(BITS_PER_WORD as u8, *symbol as u64);
            current = &root;
        }
    }
}

/// Decompress the file named in opts (HuffOpts).
pub fn decompress(opts: &HuffOpts) -> Result<()> {
    let mut br = BitReader::from_source(File::open(&opts.file)?)?;

    // The output name is the input name minus the suffix.
    let fname = match opts.file.strip_suffix(SUFFIX) {
        Some(stem) => stem.to_owned(),
        None => {
            error!("Fatal error: {} has no {} suffix.", &opts.file, SUFFIX);
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("can't decompress {}: unknown suffix", &opts.file),
            )
            .into());
        }
    };

    let mut bw = BitWriter::new(1024 * 1024);
    decompress_stream(&mut br, &mut bw)?;
    bw.flush();

    match opts.output {
        Output::Stdout => io::stdout().write_all(&bw.output)?,
        Output::File => {
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

    info!("Decompressed {} to {} bytes.", &opts.file, bw.output.len());

    if !opts.keep_input_files {
        fs::remove_file(&opts.file)?;
    }
    Ok(())
}
