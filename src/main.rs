use std::{fs, path::PathBuf};

use clap::Parser;
use tilecalc::{get_result, question::Question};
use tracing_subscriber::EnvFilter;

/// Sample question used when no question file is given.
const SAMPLE_QUESTION: &str = include_str!("../questions/piano_tuners.json");

/// tilecalc assembles an expression from factor and operation tiles and
/// evaluates it strictly left to right.
///
/// Factors are written `#N` (1-based position in the question's factor bank),
/// optionally followed by `= value` to override the number. Operations are
/// `+ - * /` or `+ − × ÷`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tilecalc to read the tile script from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Question payload (JSON) supplying the factor bank. Defaults to the
    /// built-in sample question.
    #[arg(short, long)]
    question: Option<PathBuf>,

    /// Pipe mode prints only the result of the submitted sequence.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Logs every mutation and validation verdict.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let question = match &args.question {
        Some(path) => Question::load(path),
        None => Question::from_json(SAMPLE_QUESTION),
    };
    let question = match question {
        Ok(q) => q.prepare(),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if !args.pipe_mode {
        println!("{}", question.prompt);
    }

    if let Err(e) = get_result(&question, &script, true) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
