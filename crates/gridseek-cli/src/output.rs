//! Encoding of solutions as JSON moves.

use crate::error::CliError;
use gridseek::solver::{Move, Solution};
use gridseek::types::Cell;
use serde::Serialize;

/// A word's `from`/`to` move; both ends are `null` if it was not found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRecord<'a> {
    /// The target word.
    pub word: &'a str,
    /// `[x, y]` of the first letter.
    pub from: Option<[i64; 2]>,
    /// `[x, y]` one step past the last letter.
    pub to: Option<[i64; 2]>,
}

impl<'a> From<&'a Solution> for MoveRecord<'a> {
    fn from(solution: &'a Solution) -> Self {
        let mv = Move::from_solution(solution);
        Self {
            word: &solution.word,
            from: mv.as_ref().map(|m| xy(m.from)),
            to: mv.as_ref().map(|m| xy(m.to)),
        }
    }
}

fn xy(cell: Cell) -> [i64; 2] {
    [cell.x, cell.y]
}

/// Serialize one record per solution, in solution order.
pub fn encode_moves(solutions: &[Solution], pretty: bool) -> Result<String, CliError> {
    let records: Vec<MoveRecord<'_>> = solutions.iter().map(MoveRecord::from).collect();
    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek::solver::{Solver, SolverConfig};
    use gridseek_test_utils::fixtures;

    #[test]
    fn found_and_missing_words_encode() {
        let solver = Solver::new(fixtures::cat_down(), SolverConfig::sequential()).unwrap();
        let solutions = solver.solve(&["CAT", "EMU"]).unwrap();
        assert_eq!(
            encode_moves(&solutions, false).unwrap(),
            r#"[{"word":"CAT","from":[2,0],"to":[2,3]},{"word":"EMU","from":null,"to":null}]"#
        );
    }

    #[test]
    fn pretty_output_is_multiline_json() {
        let solver = Solver::new(fixtures::cat_down(), SolverConfig::sequential()).unwrap();
        let solutions = solver.solve(&["GOD"]).unwrap();
        let json = encode_moves(&solutions, true).unwrap();
        assert!(json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["from"], serde_json::json!([5, 0]));
        assert_eq!(value[0]["to"], serde_json::json!([2, 0]));
    }

    #[test]
    fn empty_batch_is_an_empty_array() {
        assert_eq!(encode_moves(&[], false).unwrap(), "[]");
    }
}
