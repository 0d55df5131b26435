#![allow(dead_code)]

use std::path::PathBuf;

use watchonce::cli::CliArgs;
use watchonce::config::{ConfigFile, RawConfigFile, WatchSection};
use watchonce::inotify::{EventMask, HEADER_SIZE};
use watchonce::types::EventKind;

/// Builder for raw inotify records, laid out the way the kernel writes them.
pub struct RecordBuilder {
    wd: i32,
    mask: u32,
    cookie: u32,
    name: Vec<u8>,
    padded_len: Option<usize>,
    len_override: Option<u32>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            wd: 1,
            mask: EventMask::CLOSE_WRITE.bits(),
            cookie: 0,
            name: Vec::new(),
            padded_len: None,
            len_override: None,
        }
    }

    pub fn wd(mut self, wd: i32) -> Self {
        self.wd = wd;
        self
    }

    pub fn mask(mut self, mask: EventMask) -> Self {
        self.mask = mask.bits();
        self
    }

    pub fn cookie(mut self, cookie: u32) -> Self {
        self.cookie = cookie;
        self
    }

    /// Trailing name; the builder adds the NUL terminator and pads to a
    /// multiple of the header alignment like the kernel does.
    pub fn name(mut self, name: impl AsRef<[u8]>) -> Self {
        self.name = name.as_ref().to_vec();
        self
    }

    /// Pad the name field to exactly `len` bytes instead.
    pub fn padded_to(mut self, len: usize) -> Self {
        self.padded_len = Some(len);
        self
    }

    /// Write `len` into the header regardless of the bytes that follow.
    pub fn len_field(mut self, len: u32) -> Self {
        self.len_override = Some(len);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let name_field = if self.name.is_empty() && self.padded_len.is_none() {
            Vec::new()
        } else {
            let natural = (self.name.len() + 1).next_multiple_of(HEADER_SIZE);
            let len = self.padded_len.unwrap_or(natural);
            let mut field = self.name.clone();
            field.resize(len, 0);
            field
        };
        let len = self.len_override.unwrap_or(name_field.len() as u32);

        let mut out = Vec::with_capacity(HEADER_SIZE + name_field.len());
        out.extend_from_slice(&self.wd.to_ne_bytes());
        out.extend_from_slice(&self.mask.to_ne_bytes());
        out.extend_from_slice(&self.cookie.to_ne_bytes());
        out.extend_from_slice(&len.to_ne_bytes());
        out.extend_from_slice(&name_field);
        out
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                watch: WatchSection::default(),
            },
        }
    }

    pub fn events(mut self, events: &[EventKind]) -> Self {
        self.config.watch.events = events.to_vec();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.watch.timeout_secs = Some(secs);
        self
    }

    pub fn only_dir(mut self, val: bool) -> Self {
        self.config.watch.only_dir = val;
        self
    }

    pub fn dont_follow(mut self, val: bool) -> Self {
        self.config.watch.dont_follow = val;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `CliArgs` for `path` with every flag at its default.
pub fn cli_args(path: impl Into<PathBuf>) -> CliArgs {
    CliArgs {
        path: path.into(),
        events: Vec::new(),
        timeout: None,
        only_dir: false,
        no_follow: false,
        config: None,
        log_level: None,
        dry_run: false,
    }
}
