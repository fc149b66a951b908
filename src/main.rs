//! relay: interactive outbox composer.
//!
//! Entry point: parse options, set up logging and the terminal session,
//! run the menu loop, restore the terminal on the way out.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use relay_tui::config::Options;
use relay_tui::ui::screens::{menu, Session};
use relay_tui::ui::terminal::TerminalGuard;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    init_logging(&options)?;

    let guard = TerminalGuard::enter(!options.no_mouse)
        .context("failed to configure the terminal")?;

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock());
    let result = menu::run(&mut session).context("input loop failed");

    // Restore the terminal before reporting any error.
    drop(guard);
    result
}

fn init_logging(options: &Options) -> anyhow::Result<()> {
    let Some(path) = &options.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("RELAY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
