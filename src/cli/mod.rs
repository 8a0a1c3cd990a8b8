use std::process;

use clap::Parser;
use tracing::info;

use crate::fetch::InputFetcher;
use crate::models::{config, resolve_session, Puzzle};
use crate::scaffold;
use crate::solutions;
use crate::solver::SolverRegistry;

#[derive(Parser)]
#[command(name = "advent")]
#[command(about = "Advent of Code scaffolding", long_about = None)]
pub struct Cli {
    /// Puzzle set year
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Puzzle set day
    #[arg(short = 'd', long)]
    pub day: Option<u32>,

    /// Login session cookie
    #[arg(short = 's', long)]
    pub session: Option<String>,
}

pub fn run(cli: Cli) {
    let user_config = config::load_config();
    let root = user_config.root_dir();

    // Resolve everything up front: a bad year, day, or missing session
    // aborts before any file or network side effect.
    let puzzle = match Puzzle::resolve(cli.year, cli.day) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let session = match resolve_session(cli.session, &root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    info!("running Advent of Code {} day {}", puzzle.year, puzzle.day);

    let dir = match scaffold::ensure_directory(&root, &puzzle) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = scaffold::ensure_solution_stub(&dir, &puzzle) {
        eprintln!("{:#}", e);
        process::exit(1);
    }

    if let Err(e) = scaffold::ensure_test_stub(&dir, &puzzle) {
        eprintln!("{:#}", e);
        process::exit(1);
    }

    let fetcher = InputFetcher::new();
    fetcher.ensure_input_file(&dir, &puzzle, &session);

    let mut registry = SolverRegistry::new();
    solutions::register_all(&mut registry);

    // Fetch and dispatch failures were already logged; the run still exits 0.
    if let Some(result) = registry.run(&puzzle, &dir) {
        info!("solution to part one is {}", result.part_one);
        info!("solution to part two is {}", result.part_two);
    }
}
