use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use tracing::{error, warn};

use crate::fetch::INPUT_FILE;
use crate::models::Puzzle;

/// One day's solver. Implementations receive the path to the cached input
/// file; the file may be absent when the download failed.
pub trait Solution {
    fn part_one(&self, input_file: &Path) -> Result<String>;
    fn part_two(&self, input_file: &Path) -> Result<String>;
}

/// The two answers from a solver run; printed and discarded.
pub struct SolutionResult {
    pub part_one: String,
    pub part_two: String,
}

type Constructor = fn() -> Box<dyn Solution>;

/// Maps a puzzle coordinate to its solver constructor. Populated once at
/// startup by `solutions::register_all`; a later registration for the same
/// coordinate replaces the earlier one.
#[derive(Default)]
pub struct SolverRegistry {
    entries: HashMap<(i32, u32), Constructor>,
}

impl SolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, year: i32, day: u32, constructor: Constructor) {
        self.entries.insert((year, day), constructor);
    }

    /// Runs the registered solver, part one then part two. A missing
    /// registration is not an error: the run was scaffold-only. A part
    /// returning an error is logged and yields no result.
    pub fn run(&self, puzzle: &Puzzle, dir: &Path) -> Option<SolutionResult> {
        let constructor = match self.entries.get(&(puzzle.year, puzzle.day)) {
            Some(constructor) => constructor,
            None => {
                warn!(
                    "No solution registered for {} day {} - file generation only",
                    puzzle.year, puzzle.day
                );
                return None;
            }
        };

        let solution = constructor();
        let input_file = dir.join(INPUT_FILE);

        let part_one = match solution.part_one(&input_file) {
            Ok(answer) => answer,
            Err(e) => {
                error!(
                    "Part one of {} day {} failed: {:#}",
                    puzzle.year, puzzle.day, e
                );
                return None;
            }
        };

        let part_two = match solution.part_two(&input_file) {
            Ok(answer) => answer,
            Err(e) => {
                error!(
                    "Part two of {} day {} failed: {:#}",
                    puzzle.year, puzzle.day, e
                );
                return None;
            }
        };

        Some(SolutionResult { part_one, part_two })
    }
}
