use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use tabless::cli::{CliArgs, StartupConfig};
use tabless::config::ViewerConfig;
use tabless::error::ViewerError;
use tabless::runtime::{input::spawn_input_thread, App, TerminalGuard};
use tabless::table::{Session, SessionHandle, TableGrid};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    if args.wants_usage(io::stdin().is_terminal()) {
        CliArgs::command()
            .write_help(&mut io::stderr())
            .context("failed to print usage")?;
        return Ok(());
    }

    tabless::tracing::init();

    let config = args.into_config(ViewerConfig::load())?;
    tracing::info!(input = ?config.input, "starting");

    let input = config.input.open()?;
    let grid = Arc::new(TableGrid::new());
    let session = Session::spawn(input, config.session.clone(), grid.clone())
        .map_err(ViewerError::Spawn)?;

    run(&config, grid, session)
}

/// Everything that needs the terminal; the guard is gone before any error
/// is reported
fn run(config: &StartupConfig, grid: Arc<TableGrid>, session: SessionHandle) -> Result<()> {
    let mut guard = TerminalGuard::acquire().context("failed to set up terminal")?;
    let screen = guard.size()?;
    let events = spawn_input_thread().context("failed to start input thread")?;

    let app = App::new(config, grid, session, screen);
    let result = app.run(guard.terminal_mut(), events);

    drop(guard);
    result.context("viewer failed")
}
