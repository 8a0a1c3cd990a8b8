use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::error;
use ureq::Agent;

use crate::models::Puzzle;

pub const INPUT_FILE: &str = "input.txt";

const AOC_BASE_URL: &str = "https://adventofcode.com";

/// Downloads puzzle inputs. One agent is constructed per process and reused
/// for its lifetime; the session cookie travels with each request.
pub struct InputFetcher {
    agent: Agent,
    base_url: String,
}

impl InputFetcher {
    pub fn new() -> Self {
        Self::with_base_url(AOC_BASE_URL)
    }

    fn with_base_url(base_url: &str) -> Self {
        Self {
            agent: Agent::new_with_defaults(),
            base_url: base_url.to_string(),
        }
    }

    /// Caches the puzzle input at `<dir>/input.txt`. An existing file is a
    /// cache hit and skips the network entirely. Download failures are
    /// logged and swallowed; the file is left absent so a later run retries.
    pub fn ensure_input_file(&self, dir: &Path, puzzle: &Puzzle, session: &str) {
        let input_file = dir.join(INPUT_FILE);
        if input_file.exists() {
            return;
        }

        let url = format!(
            "{}/{}/day/{}/input",
            self.base_url, puzzle.year, puzzle.day
        );

        match self.download(&url, session) {
            Ok(body) => {
                if let Err(e) = fs::write(&input_file, body)
                    .with_context(|| format!("Failed to write {}", input_file.display()))
                {
                    error!("{:#}", e);
                }
            }
            Err(e) => error!("Unable to download input file from {}: {:#}", url, e),
        }
    }

    fn download(&self, url: &str, session: &str) -> Result<String> {
        let mut response = self
            .agent
            .get(url)
            .header("Cookie", format!("session={}", session))
            .call()
            .context("request failed")?;

        response
            .body_mut()
            .read_to_string()
            .context("failed to read response body")
    }
}

impl Default for InputFetcher {
    fn default() -> Self {
        Self::new()
    }
}
