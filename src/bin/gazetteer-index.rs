//! gazetteer-index CLI binary.

use std::io;
use std::process;

use clap::Parser;
use gazetteer_index::cli::{args::*, commands::*, configure_logging};

fn main() {
    let args = GazetteerArgs::parse();

    configure_logging(args.verbosity());

    let stdout = io::stdout();
    if let Err(e) = execute_command(&args, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
