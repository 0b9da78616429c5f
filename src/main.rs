use std::fs;

use clap::Parser;
use log::LevelFilter;
use mathnote::run_session;

/// mathnote evaluates handwritten mathematical notation, one statement per
/// line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mathnote to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the result of every statement instead of only the
    /// last one.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Logs tokenizing, parsing and simplification steps.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run_session(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
