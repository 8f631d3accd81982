use clap::Parser;

use std::io::Write;
use std::path::PathBuf;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use mbslib::io::*;
use mbslib::search;
use mbslib::SearchFailure;

/// Directory in which experiment results are saved.
pub const RESULTS_DIR: &str = "results";

/// Print the given error message and exit with the given code.
macro_rules! fatal_error {
    ($code:expr, $($arg:tt)*) => {{
        eprint!("FATAL ERROR: ");
        eprintln!($($arg)*);
        std::process::exit($code);
    }};
}

mod commands;
use commands::*;

#[derive(Parser, Debug)]
#[command(version, about = "Marble board search command line interface")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    args.command.run();
}
