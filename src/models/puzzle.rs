use anyhow::{bail, Result};
use chrono::{Datelike, Local, NaiveDate};

/// One puzzle instance, identified by its (year, day) coordinate.
/// Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub year: i32,
    pub day: u32,
}

impl Puzzle {
    /// Resolves the effective coordinate from the CLI flags, defaulting
    /// from today's date where the flags are omitted.
    pub fn resolve(year: Option<i32>, day: Option<u32>) -> Result<Self> {
        Self::resolve_on(year, day, Local::now().date_naive())
    }

    fn resolve_on(year: Option<i32>, day: Option<u32>, today: NaiveDate) -> Result<Self> {
        let year = resolve_year(year, today)?;
        let day = resolve_day(day, today)?;
        Ok(Self { year, day })
    }
}

// An omitted year only defaults during December.
fn resolve_year(year: Option<i32>, today: NaiveDate) -> Result<i32> {
    let current_year = today.year();

    match year {
        None if today.month() == 12 => Ok(current_year),
        Some(year) if year > 2015 && year <= current_year => Ok(year),
        _ => bail!("Select a valid puzzle set year (2016 - {})", current_year),
    }
}

fn resolve_day(day: Option<u32>, today: NaiveDate) -> Result<u32> {
    match day {
        None if today.day() < 26 => Ok(today.day()),
        Some(day) if (1..=25).contains(&day) => Ok(day),
        _ => bail!("Select a valid puzzle set day (1 - 25)"),
    }
}
