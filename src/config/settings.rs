// src/config/settings.rs

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CliArgs;
use crate::config::model::{ConfigFile, WatchSection};
use crate::inotify::EventMask;
use crate::types::EventKind;

/// Everything a single run needs, after merging CLI flags over the config
/// file over built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSettings {
    pub path: PathBuf,
    pub mask: EventMask,
    pub timeout: Option<Duration>,
}

impl WatchSettings {
    pub fn resolve(args: &CliArgs, file: Option<&ConfigFile>) -> Self {
        let defaults = WatchSection::default();
        let section = file.map(|cfg| &cfg.watch).unwrap_or(&defaults);

        let events: &[EventKind] = if args.events.is_empty() {
            &section.events
        } else {
            &args.events
        };

        let mut mask = EventKind::combined_mask(events);
        if args.only_dir || section.only_dir {
            mask |= EventMask::ONLYDIR;
        }
        if args.no_follow || section.dont_follow {
            mask |= EventMask::DONT_FOLLOW;
        }

        let timeout = args
            .timeout
            .or(section.timeout_secs)
            .map(Duration::from_secs);

        Self {
            path: args.path.clone(),
            mask,
            timeout,
        }
    }
}
