use std::io;

use anyhow::{Context, Result};
use env_logger::Env;

use expense_tracker::cli::Shell;
use expense_tracker::config::TrackerPaths;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let paths = TrackerPaths::new();
    let stdin = io::stdin();

    let mut shell = Shell::open(&paths, stdin.lock(), io::stdout()).with_context(|| {
        format!(
            "Could not load expenses from {}; the file was left unchanged",
            paths.expenses_file().display()
        )
    })?;

    shell.run()?;
    Ok(())
}
