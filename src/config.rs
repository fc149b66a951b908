//! Command-line options for the `relay` binary.

use std::path::PathBuf;

use clap::Parser;

/// Terminal message composer with an in-memory outbox.
#[derive(Debug, Parser)]
#[command(name = "relay", version)]
pub struct Options {
    /// Append structured logs to this file. Logging is off without it;
    /// stdout belongs to the UI. Filtered via RELAY_LOG (default "info").
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Skip SGR mouse capture for terminals without mouse support.
    #[arg(long)]
    pub no_mouse: bool,
}
