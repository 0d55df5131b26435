// src/lib.rs

#[cfg(not(target_os = "linux"))]
compile_error!("watchonce relies on Linux inotify and only builds for Linux targets");

pub mod cli;
pub mod config;
pub mod errors;
pub mod inotify;
pub mod logging;
pub mod notifier;
pub mod types;

use std::io::Write;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, WatchSettings};
use crate::errors::{Result, WatchonceError};
use crate::inotify::Channel;
use crate::notifier::notify_once;

/// High-level entry point used by `main.rs`.
///
/// Reports to stdout. See [`run_with_output`].
pub async fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out).await
}

/// Resolve settings, then open a channel, register one watch, wait for one
/// notification and write the report line to `out`.
///
/// The channel and the watch are scoped to this call: every return path,
/// including errors, removes the watch and closes the channel.
pub async fn run_with_output<W: Write>(args: CliArgs, out: &mut W) -> Result<()> {
    let file_cfg = match args.config {
        Some(ref path) => Some(load_and_validate(path)?),
        None => None,
    };
    let settings = WatchSettings::resolve(&args, file_cfg.as_ref());

    if args.dry_run {
        print_dry_run(&settings, out)?;
        return Ok(());
    }

    let channel = Channel::open().map_err(WatchonceError::ChannelOpen)?;
    let watch = channel
        .watch(&settings.path, settings.mask)
        .map_err(|source| WatchonceError::Registration {
            path: settings.path.clone(),
            source,
        })?;
    info!(path = ?settings.path, wd = watch.descriptor().as_raw(), "watching");

    notify_once(&channel, out, settings.timeout).await?;

    debug!("single notification reported; releasing watch and channel");
    Ok(())
}

/// Simple dry-run output: the settings a real run would use.
fn print_dry_run<W: Write>(settings: &WatchSettings, out: &mut W) -> Result<()> {
    writeln!(out, "watchonce dry-run")?;
    writeln!(out, "  path = {}", settings.path.display())?;
    writeln!(out, "  mask = {:#010x} {:?}", settings.mask.bits(), settings.mask.flag_names())?;
    match settings.timeout {
        Some(limit) => writeln!(out, "  timeout = {}s", limit.as_secs())?,
        None => writeln!(out, "  timeout = none")?,
    }
    out.flush()?;

    debug!("dry-run complete (no watch registered)");
    Ok(())
}
