use std::fmt::{Display, Formatter};
use std::process::exit;

use clap::Parser;
use log::LevelFilter;

/// Command Line Interpretation - uses the external CLAP crate.
/// (Define author, version and about here.)
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "huffzip, a Huffman-tree file compressor.",
    long_about = None)]
struct Args {
    /// Filename of file to process
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input file
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Force overwriting the output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep the input file
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Sets verbosity. -v shows very little, -vvvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: usize,
}

/// Zip or Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Resolved command line options used by the rest of the program.
#[derive(Debug)]
pub struct HuffOpts {
    /// Name of the file to read for input
    pub file: String,
    /// Compress or decompress
    pub op_mode: Mode,
    /// Silently overwrite an existing file with the same name
    pub force_overwrite: bool,
    /// Don't remove the input file after processing
    pub keep_input_files: bool,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub level: LevelFilter,
}

/// Parse the command line into a HuffOpts. Exits with a message when no
/// input file is named.
pub fn huffopts_init() -> HuffOpts {
    let args = Args::parse();

    let file = match args.filename {
        Some(file) => file,
        None => {
            eprintln!("huffzip: no input file given. (Try --help.)");
            exit(1);
        }
    };

    // -d wins over -z; with neither, a .huf suffix means decompress.
    let op_mode = if args.decompress {
        Mode::Unzip
    } else if !args.compress && file.ends_with(".huf") {
        Mode::Unzip
    } else {
        Mode::Zip
    };

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    HuffOpts {
        file,
        op_mode,
        force_overwrite: args.force,
        // Writing to stdout never consumes the input file.
        keep_input_files: args.keep || args.stdout,
        output: if args.stdout {
            Output::Stdout
        } else {
            Output::File
        },
        level,
    }
}
