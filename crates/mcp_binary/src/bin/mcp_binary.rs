//! Converts text or a file between text and space separated binary.

use clap::Parser;
use mcp_binary::{args::ConverterCli, binary_logic};
use std::process;

fn main() {
    // Handle commandline arguments.
    let opt = ConverterCli::parse();
    if let Err(e) = binary_logic::run(opt) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
