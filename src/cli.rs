// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::EventKind;

/// Command-line arguments for `watchonce`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchonce",
    version,
    about = "Wait for one inotify event on a path and print the file it names.",
    long_about = None
)]
pub struct CliArgs {
    /// File or directory to watch.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Event kind to wait for. Repeat to wait for any of several.
    ///
    /// Default: `close-write` (or `[watch].events` from the config file).
    #[arg(short = 'e', long = "event", value_enum, value_name = "KIND")]
    pub events: Vec<EventKind>,

    /// Give up after this many seconds without an event.
    ///
    /// If omitted (and not set in the config file), wait forever.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Fail registration unless PATH is a directory.
    #[arg(long)]
    pub only_dir: bool,

    /// Watch a symlink itself rather than its target.
    #[arg(long)]
    pub no_follow: bool,

    /// Optional config file (TOML).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHONCE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the watch settings, but don't watch anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
///
/// On a usage error this prints the diagnostic and exits with status 2.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
