use clap::Parser;
use gridseek::matcher::MatcherKind;
use gridseek::solver::SolverConfig;
use gridseek_cli::{run_interactive, solve_record, CliError, SessionOptions};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Gridseek word-search solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Solve the single JSON record in this file instead of prompting on stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Substring index backend ("automaton" or "scan")
    #[arg(short, long, default_value = "automaton")]
    matcher: MatcherKind,

    /// Worker threads for large batches (default: auto-detect)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Batches smaller than this are solved on one thread
    #[arg(long, default_value_t = 64)]
    parallel_threshold: usize,

    /// Pretty-print the moves JSON
    #[arg(long)]
    pretty: bool,

    /// Print only the moves JSON
    #[arg(short, long)]
    quiet: bool,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

/// Entry point of the gridseek CLI.
///
/// Delegates to [`try_main`], printing any error to stderr before
/// exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("GRIDSEEK_DEBUG").is_ok();
    gridseek_cli::log::init_logger(debug_enabled);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Solve the file record if `--input` was given, otherwise run the
/// interactive loop on stdin.
fn try_main(cli: Cli) -> Result<(), CliError> {
    let opts = SessionOptions {
        config: SolverConfig {
            matcher: cli.matcher,
            worker_count: cli.workers,
            parallel_threshold: cli.parallel_threshold,
        },
        pretty: cli.pretty,
        quiet: cli.quiet,
    };
    let mut stdout = io::stdout().lock();

    match cli.input {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|source| CliError::ReadInput {
                path: path.display().to_string(),
                source,
            })?;
            let found = solve_record(&json, &opts, &mut stdout)?;
            log::info!("found {found} words from {}", path.display());
        }
        None => {
            let mut stderr = io::stderr().lock();
            run_interactive(io::stdin().lock(), &mut stdout, &mut stderr, &opts)?;
        }
    }
    Ok(())
}
