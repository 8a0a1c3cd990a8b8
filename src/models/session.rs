use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

pub const SESSION_FILE: &str = "session.txt";
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Resolves the session credential: the explicit flag wins, then a
/// `session.txt` file in the scaffold root, then the `AOC_SESSION`
/// environment variable. The token is never written back anywhere.
pub fn resolve_session(flag: Option<String>, root: &Path) -> Result<String> {
    resolve_from(flag, &root.join(SESSION_FILE), env::var(SESSION_ENV).ok())
}

fn resolve_from(
    flag: Option<String>,
    session_file: &Path,
    env_session: Option<String>,
) -> Result<String> {
    if let Some(session) = flag {
        return Ok(session);
    }

    if session_file.exists() {
        let contents = fs::read_to_string(session_file)
            .with_context(|| format!("Failed to read {}", session_file.display()))?;
        return Ok(contents.trim().to_string());
    }

    if let Some(session) = env_session {
        return Ok(session);
    }

    bail!(
        "Specify a session cookie using a command line argument (--session), \
         a file ({}), or an environment variable ({})",
        SESSION_FILE,
        SESSION_ENV
    )
}
