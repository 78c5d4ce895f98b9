//! Solving records from a file or an interactive stream.

use crate::error::CliError;
use crate::input::PuzzleInput;
use crate::output::encode_moves;
use gridseek::solver::{Solver, SolverConfig};
use std::io::{BufRead, Write};
use std::time::Instant;

/// How records are solved and reported.
#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    /// Solver configuration applied to every record.
    pub config: SolverConfig,
    /// Pretty-print the moves JSON.
    pub pretty: bool,
    /// Omit the per-word summary lines.
    pub quiet: bool,
}

/// Solve one JSON record, writing the summary lines and the moves JSON
/// to `out`. Returns the number of words found.
pub fn solve_record<W: Write>(
    json: &str,
    opts: &SessionOptions,
    out: &mut W,
) -> Result<usize, CliError> {
    let (grid, words) = PuzzleInput::parse(json)?.into_parts()?;

    let t_solve = Instant::now();
    let solver = Solver::new(grid, opts.config.clone())?;
    let solutions = solver.solve(&words)?;
    log::info!(
        "solved {} words in {:.3}s",
        words.len(),
        t_solve.elapsed().as_secs_f64()
    );

    if !opts.quiet {
        for solution in &solutions {
            writeln!(out, "{solution}")?;
        }
    }
    writeln!(out, "{}", encode_moves(&solutions, opts.pretty)?)?;
    out.flush()?;

    Ok(solutions.iter().filter(|s| s.result.is_found()).count())
}

/// Prompt for records on `prompt`, reading one JSON record per line from
/// `input` until an empty line or end of input.
///
/// A record that fails to decode or solve is reported on `prompt` and
/// the loop continues. Returns the number of records solved.
pub fn run_interactive<R, W, E>(
    mut input: R,
    out: &mut W,
    prompt: &mut E,
    opts: &SessionOptions,
) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut solved = 0;
    let mut line = String::new();
    loop {
        write!(prompt, "Enter JSON: ")?;
        prompt.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let record = line.trim();
        if record.is_empty() {
            break;
        }

        match solve_record(record, opts, out) {
            Ok(_) => solved += 1,
            Err(CliError::Io(e)) => return Err(CliError::Io(e)),
            Err(e) => {
                log::warn!("skipping record: {e}");
                writeln!(prompt, "Error: {e}")?;
            }
        }
    }
    log::debug!("interactive session ended after {solved} records");
    Ok(solved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_mode_prints_only_json() {
        let opts = SessionOptions {
            quiet: true,
            ..SessionOptions::default()
        };
        let mut out = Vec::new();
        let found = solve_record(
            r#"{"grid": ["CATDOG"], "words": ["DOG", "COW"]}"#,
            &opts,
            &mut out,
        )
        .unwrap();
        assert_eq!(found, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[{\"word\":\"DOG\",\"from\":[3,0],\"to\":[6,0]},{\"word\":\"COW\",\"from\":null,\"to\":null}]\n"
        );
    }

    #[test]
    fn summary_lines_precede_json() {
        let mut out = Vec::new();
        solve_record(
            r#"{"grid": ["CATDOG"], "words": ["GOD"]}"#,
            &SessionOptions::default(),
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("GOD: (5, 0) W"));
        assert!(lines.next().unwrap().starts_with('['));
    }
}
