// src/config/model.rs

use serde::Deserialize;

use crate::types::EventKind;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [watch]
/// events = ["close_write", "moved_to"]
/// timeout_secs = 30
/// only_dir = true
/// dont_follow = false
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// Watch behaviour from `[watch]`.
    #[serde(default)]
    pub watch: WatchSection,
}

/// Validated configuration.
///
/// Only obtainable via `TryFrom<RawConfigFile>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub watch: WatchSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(watch: WatchSection) -> Self {
        Self { watch }
    }
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchSection {
    /// Event kinds to register for. Defaults to `["close_write"]`.
    #[serde(default = "default_events")]
    pub events: Vec<EventKind>,

    /// Give up after this many seconds. `None` waits forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Only watch the path if it is a directory.
    #[serde(default)]
    pub only_dir: bool,

    /// Do not dereference the path if it is a symlink.
    #[serde(default)]
    pub dont_follow: bool,
}

fn default_events() -> Vec<EventKind> {
    vec![EventKind::default()]
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            events: default_events(),
            timeout_secs: None,
            only_dir: false,
            dont_follow: false,
        }
    }
}
