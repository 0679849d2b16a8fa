//! Command-line front end: reads lenient JSON and prints it back as strict
//! JSON.

use clap::{ArgAction, Parser};
use jsonlax::{DEFAULT_MAX_NESTING_DEPTH, Limits};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jsonlax")]
#[command(about = "Parse lenient JSON and print it as strict JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file; standard input when omitted or "-"
    file: Option<PathBuf>,

    /// Pretty-print with N spaces per nesting level instead of compact output
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Only check that the input parses; print nothing
    #[arg(long, conflicts_with = "indent")]
    check: bool,

    /// Maximum nesting depth of arrays and objects
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Log more (-v for debug, -vv for trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            debug!("reading {}", path.display());
            std::fs::read_to_string(path)
        }
        _ => {
            debug!("reading standard input");
            io::read_to_string(io::stdin())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = match read_input(cli.file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let value = match jsonlax::parse_with_limits(&input, Limits::new(cli.max_depth)) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };

    if cli.check {
        return ExitCode::SUCCESS;
    }
    match cli.indent {
        Some(indent) => println!("{}", jsonlax::format_value(&value, indent)),
        None => println!("{value}"),
    }
    ExitCode::SUCCESS
}
