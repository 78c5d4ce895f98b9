//! Batch solving over a fixed grid.

use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::locator::{WordLocator, WordResult};
use crate::projector::{project, Move};
use gridseek_core::{Cell, Grid};
use gridseek_lines::LineMap;
use gridseek_matcher::SubstringIndex;
use std::fmt;
use std::thread;

/// The result for one target word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The word as given.
    pub word: String,
    /// Where it was found, if anywhere.
    pub result: WordResult,
    /// Projected end cell; `Some` iff the word was found.
    pub end: Option<Cell>,
}

impl Solution {
    fn new(word: &str, result: WordResult) -> Self {
        let end = result
            .placement()
            .map(|p| project(word.chars().count(), p));
        Self {
            word: word.to_string(),
            result,
            end,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            WordResult::Found(p) => write!(f, "{}: {p}", self.word),
            WordResult::NotFound => write!(f, "{}: not found", self.word),
        }
    }
}

/// A grid with its lines and substring index, ready to resolve words.
///
/// Everything is built in [`new`](Self::new) and never mutated, so
/// every lookup observes a fully constructed index.
pub struct Solver {
    grid: Grid,
    lines: LineMap,
    index: Box<dyn SubstringIndex>,
    config: SolverConfig,
}

impl Solver {
    /// Validate `config`, extract the lines of `grid`, and build the index.
    pub fn new(grid: Grid, config: SolverConfig) -> Result<Self, SolveError> {
        config.validate()?;
        let lines = LineMap::extract(&grid);
        let index = config.matcher.build(&lines);
        log::info!(
            "indexed {}x{} grid: {} lines, {} chars, backend {}",
            grid.width(),
            grid.height(),
            lines.len(),
            lines.total_chars(),
            index.name()
        );
        Ok(Self {
            grid,
            lines,
            index,
            config,
        })
    }

    /// Build a grid from string rows and a solver over it.
    ///
    /// Returns [`SolveError::InvalidGrid`] for empty or ragged rows.
    pub fn from_rows<I, S>(rows: I, config: SolverConfig) -> Result<Self, SolveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Grid::from_rows(rows)?, config)
    }

    /// The grid being searched.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The extracted lines.
    pub fn lines(&self) -> &LineMap {
        &self.lines
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// A locator borrowing this solver's lines and index.
    pub fn locator(&self) -> WordLocator<'_> {
        WordLocator::new(&self.lines, self.index.as_ref())
    }

    /// Locate a single word.
    pub fn locate_word(&self, word: &str) -> WordResult {
        self.locator().locate_str(word)
    }

    /// Resolve every word, returning one [`Solution`] per input in input
    /// order.
    ///
    /// Duplicate words are resolved independently. Batches of at least
    /// `parallel_threshold` words are spread over worker threads when
    /// more than one worker is configured.
    pub fn solve<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Solution>, SolveError> {
        let workers = self.config.resolved_worker_count().min(words.len());
        let solutions = if workers > 1 && words.len() >= self.config.parallel_threshold {
            self.solve_parallel(words, workers)?
        } else {
            let locator = self.locator();
            words
                .iter()
                .map(|w| solve_one(&locator, w.as_ref()))
                .collect()
        };
        let found = solutions.iter().filter(|s| s.result.is_found()).count();
        log::info!(
            "found {found}/{} words ({} worker{})",
            solutions.len(),
            workers.max(1),
            if workers > 1 { "s" } else { "" }
        );
        Ok(solutions)
    }

    /// [`solve`](Self::solve), keeping only found words as moves.
    pub fn moves<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Move>, SolveError> {
        Ok(self
            .solve(words)?
            .iter()
            .filter_map(Move::from_solution)
            .collect())
    }

    fn solve_parallel<S: AsRef<str>>(
        &self,
        words: &[S],
        workers: usize,
    ) -> Result<Vec<Solution>, SolveError> {
        let (task_tx, task_rx) = crossbeam_channel::unbounded::<(usize, &str)>();
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, Solution)>();
        for (i, w) in words.iter().enumerate() {
            task_tx
                .send((i, w.as_ref()))
                .map_err(|_| SolveError::WorkerPanicked)?;
        }
        drop(task_tx);

        let locator = self.locator();
        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let rx = task_rx.clone();
                    let tx = result_tx.clone();
                    let locator = &locator;
                    scope.spawn(move || {
                        for (i, word) in rx.iter() {
                            if tx.send((i, solve_one(locator, word))).is_err() {
                                break;
                            }
                        }
                    })
                })
                .collect();
            drop(result_tx);

            let mut slots: Vec<Option<Solution>> = (0..words.len()).map(|_| None).collect();
            for (i, solution) in result_rx.iter() {
                slots[i] = Some(solution);
            }
            // Every handle must be joined; an unjoined panicked worker
            // makes the scope itself panic.
            let panicked = handles
                .into_iter()
                .map(|handle| handle.join().is_err())
                .fold(0, |n, failed| n + usize::from(failed));
            if panicked > 0 {
                log::error!("{panicked} of {workers} solver workers panicked");
                return Err(SolveError::WorkerPanicked);
            }
            slots
                .into_iter()
                .collect::<Option<Vec<_>>>()
                .ok_or(SolveError::WorkerPanicked)
        })
    }
}

impl fmt::Debug for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("lines", &self.lines.len())
            .field("index", &self.index.name())
            .field("config", &self.config)
            .finish()
    }
}

fn solve_one(locator: &WordLocator<'_>, word: &str) -> Solution {
    let result = locator.locate_str(word);
    match &result {
        WordResult::Found(p) => log::debug!("{word}: {p}"),
        WordResult::NotFound => log::debug!("{word}: not found"),
    }
    Solution::new(word, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::{Direction, GridError};
    use gridseek_matcher::MatcherKind;
    use gridseek_test_utils::fixtures;

    #[test]
    fn solutions_follow_input_order_with_ends() {
        let solver = Solver::new(fixtures::cat_down(), SolverConfig::sequential()).unwrap();
        let out = solver.solve(&["DOG", "BIRD", "CAT"]).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].word, "DOG");
        assert_eq!(out[0].end, Some(Cell::new(6, 0)));
        assert_eq!(out[1].result, WordResult::NotFound);
        assert_eq!(out[1].end, None);
        assert_eq!(out[2].end, Some(Cell::new(2, 3)));
    }

    #[test]
    fn duplicates_are_each_solved() {
        let solver = Solver::new(fixtures::cat_dog(), SolverConfig::sequential()).unwrap();
        let out = solver.solve(&["CAT", "CAT"]).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], out[1]);
    }

    #[test]
    fn invalid_grid_produces_no_solver() {
        let err = Solver::from_rows(["ABC", "AB"], SolverConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidGrid(GridError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected_before_building() {
        let config = SolverConfig {
            parallel_threshold: 0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            Solver::new(fixtures::cat_dog(), config),
            Err(SolveError::Config(_))
        ));
    }

    #[test]
    fn parallel_batch_matches_sequential() {
        let (grid, placements) = fixtures::compass_rose();
        let mut words: Vec<String> = Vec::new();
        for round in 0..20 {
            for p in &placements {
                words.push(p.word.clone());
            }
            words.push(format!("MISSING{round}"));
        }
        let seq = Solver::new(grid.clone(), SolverConfig::sequential()).unwrap();
        let par = Solver::new(
            grid,
            SolverConfig {
                worker_count: Some(4),
                parallel_threshold: 1,
                ..SolverConfig::default()
            },
        )
        .unwrap();
        assert_eq!(par.solve(&words).unwrap(), seq.solve(&words).unwrap());
    }

    /// Panics on every lookup.
    struct PanickingIndex;

    impl SubstringIndex for PanickingIndex {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn locate(&self, _pattern: &[char]) -> Option<gridseek_matcher::Hit> {
            panic!("lookup failed");
        }
    }

    #[test]
    fn every_worker_panicking_is_reported_as_error() {
        let grid = fixtures::cat_dog();
        let solver = Solver {
            lines: LineMap::extract(&grid),
            grid,
            index: Box::new(PanickingIndex),
            config: SolverConfig {
                worker_count: Some(4),
                parallel_threshold: 1,
                ..SolverConfig::default()
            },
        };
        let words = vec!["CAT"; 16];
        assert_eq!(solver.solve(&words), Err(SolveError::WorkerPanicked));
    }

    #[test]
    fn backends_produce_identical_solutions() {
        let (grid, placements) = fixtures::compass_rose();
        let words: Vec<&str> = placements.iter().map(|p| p.word.as_str()).collect();
        let scan = Solver::new(
            grid.clone(),
            SolverConfig {
                matcher: MatcherKind::LinearScan,
                ..SolverConfig::sequential()
            },
        )
        .unwrap();
        let sam = Solver::new(grid, SolverConfig::sequential()).unwrap();
        assert_eq!(scan.solve(&words).unwrap(), sam.solve(&words).unwrap());
    }

    #[test]
    fn moves_skip_missing_words() {
        let solver = Solver::new(fixtures::cat_down(), SolverConfig::sequential()).unwrap();
        let moves = solver.moves(&["CAT", "EMU"]).unwrap();
        assert_eq!(
            moves,
            vec![Move {
                word: "CAT".into(),
                from: Cell::new(2, 0),
                to: Cell::new(2, 3),
            }]
        );
    }

    #[test]
    fn solution_display() {
        let solver = Solver::new(fixtures::cat_down(), SolverConfig::sequential()).unwrap();
        let out = solver.solve(&["CAT", "EMU"]).unwrap();
        assert_eq!(out[0].to_string(), "CAT: (2, 0) S");
        assert_eq!(out[1].to_string(), "EMU: not found");
        assert_eq!(
            solver.locate_word("GOD"),
            WordResult::Found(crate::Placement {
                start: Cell::new(5, 0),
                direction: Direction::W,
            })
        );
    }
}
