use std::{fs, io, process::ExitCode};

use clap::Parser;
use log::{LevelFilter, debug, error};
use mathparse::{
    interpreter::{
        evaluator::core::{DEFAULT_MAX_DEPTH, Evaluator},
        scanner::Grouping,
    },
    repl::{Flow, Session},
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// mathparse is a calculator for arithmetic expressions with `+ - * / ^` and
/// parentheses. Without an input it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mathparse to read a script file instead of a single expression.
    #[arg(short, long)]
    file: bool,

    /// Only print results, not the individual operations.
    #[arg(long)]
    no_trace: bool,

    /// Group operators of equal precedence left to right, so `8-3-2` is `3`.
    #[arg(long)]
    left_to_right: bool,

    /// Deepest operator or parenthesis nesting accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// An expression, or a script path with `--file`.
    input: Option<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

fn interactive(session: &mut Session<io::Stdout>) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                if session.process_line(&line)? == Flow::Stop {
                    break;
                }
                editor.add_history_entry(line.as_str())?;
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let grouping = if args.left_to_right { Grouping::LeftToRight } else { Grouping::RightToLeft };
    let evaluator = Evaluator::new().with_max_depth(args.max_depth)
                                    .with_grouping(grouping);
    debug!("starting with {evaluator:?}");

    let mut session = Session::new(evaluator, io::stdout(), !args.no_trace);

    let Some(input) = args.input else {
        return match interactive(&mut session) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("line editor failed: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let source = if args.file {
        match fs::read_to_string(&input) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{input}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        input
    };

    match session.run_script(&source) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Failed to write output: {e}");
            ExitCode::FAILURE
        },
    }
}
