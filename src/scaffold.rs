use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::Puzzle;

pub fn solution_file_name(puzzle: &Puzzle) -> String {
    format!("day{}_{}.rs", puzzle.day, puzzle.year)
}

pub fn test_file_name(puzzle: &Puzzle) -> String {
    format!("day{}_{}_test.rs", puzzle.day, puzzle.year)
}

/// Creates `<root>/<year>/<day>` if missing and returns its path. Safe to
/// call repeatedly.
pub fn ensure_directory(root: &Path, puzzle: &Puzzle) -> Result<PathBuf> {
    let dir = root
        .join(puzzle.year.to_string())
        .join(puzzle.day.to_string());
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    Ok(dir)
}

/// Writes the stub solver file unless it already exists. Existing files are
/// never read or overwritten.
pub fn ensure_solution_stub(dir: &Path, puzzle: &Puzzle) -> Result<()> {
    let path = dir.join(solution_file_name(puzzle));
    if path.exists() {
        return Ok(());
    }

    fs::write(&path, solution_template(puzzle))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Writes the stub test file unless it already exists.
pub fn ensure_test_stub(dir: &Path, puzzle: &Puzzle) -> Result<()> {
    let path = dir.join(test_file_name(puzzle));
    if path.exists() {
        return Ok(());
    }

    fs::write(&path, test_template(puzzle))
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn solution_template(puzzle: &Puzzle) -> String {
    format!(
        r#"use std::path::Path;

use anyhow::Result;

use crate::solver::Solution;

pub struct Day{day}Y{year};

impl Solution for Day{day}Y{year} {{
    fn part_one(&self, _input_file: &Path) -> Result<String> {{
        Ok("unsolved".to_string())
    }}

    fn part_two(&self, _input_file: &Path) -> Result<String> {{
        Ok("unsolved".to_string())
    }}
}}
"#,
        day = puzzle.day,
        year = puzzle.year
    )
}

fn test_template(puzzle: &Puzzle) -> String {
    format!(
        r#"//! Tests for Advent of Code {year} day {day}.

#[cfg(test)]
mod tests {{
    #[test]
    fn have_a_test() {{
    }}
}}
"#,
        day = puzzle.day,
        year = puzzle.year
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: Puzzle = Puzzle { year: 2023, day: 5 };

    #[test]
    fn ensure_directory_is_repeatable() {
        let root = tempfile::tempdir().unwrap();

        let first = ensure_directory(root.path(), &PUZZLE).unwrap();
        let second = ensure_directory(root.path(), &PUZZLE).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, root.path().join("2023").join("5"));
        assert!(first.is_dir());
    }

    #[test]
    fn stub_generation_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let dir = ensure_directory(root.path(), &PUZZLE).unwrap();

        ensure_solution_stub(&dir, &PUZZLE).unwrap();
        ensure_test_stub(&dir, &PUZZLE).unwrap();
        let solution = fs::read(dir.join("day5_2023.rs")).unwrap();
        let test = fs::read(dir.join("day5_2023_test.rs")).unwrap();

        ensure_solution_stub(&dir, &PUZZLE).unwrap();
        ensure_test_stub(&dir, &PUZZLE).unwrap();

        assert_eq!(solution, fs::read(dir.join("day5_2023.rs")).unwrap());
        assert_eq!(test, fs::read(dir.join("day5_2023_test.rs")).unwrap());
    }

    #[test]
    fn solution_stub_has_two_unsolved_parts() {
        let root = tempfile::tempdir().unwrap();
        let dir = ensure_directory(root.path(), &PUZZLE).unwrap();

        ensure_solution_stub(&dir, &PUZZLE).unwrap();
        let stub = fs::read_to_string(dir.join("day5_2023.rs")).unwrap();

        assert!(stub.contains("Day5Y2023"));
        assert!(stub.contains("fn part_one"));
        assert!(stub.contains("fn part_two"));
        assert_eq!(stub.matches(r#""unsolved""#).count(), 2);
    }

    #[test]
    fn test_stub_is_tagged_with_year_and_day() {
        let root = tempfile::tempdir().unwrap();
        let dir = ensure_directory(root.path(), &PUZZLE).unwrap();

        ensure_test_stub(&dir, &PUZZLE).unwrap();
        let stub = fs::read_to_string(dir.join("day5_2023_test.rs")).unwrap();

        assert!(stub.contains("2023 day 5"));
        assert!(stub.contains("#[test]"));
    }

    #[test]
    fn existing_files_are_never_overwritten() {
        let root = tempfile::tempdir().unwrap();
        let dir = ensure_directory(root.path(), &PUZZLE).unwrap();

        fs::write(dir.join("day5_2023.rs"), "my solution").unwrap();
        fs::write(dir.join("day5_2023_test.rs"), "my tests").unwrap();

        ensure_solution_stub(&dir, &PUZZLE).unwrap();
        ensure_test_stub(&dir, &PUZZLE).unwrap();

        assert_eq!(
            fs::read_to_string(dir.join("day5_2023.rs")).unwrap(),
            "my solution"
        );
        assert_eq!(
            fs::read_to_string(dir.join("day5_2023_test.rs")).unwrap(),
            "my tests"
        );
    }
}
