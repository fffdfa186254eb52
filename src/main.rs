//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]
mod bitstream;
mod compression;
mod error;
mod huffman_coding;
mod tools;

use compression::compress::compress;
use compression::decompress::decompress;
use tools::cli::{huffopts_init, Mode};

use log::info;
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> error::Result<()> {
    let options = huffopts_init();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        options.level,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .expect("no other logger is installed");

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
    };

    info!("Done.\n");
    result
}
