// src/errors.rs

//! Crate-wide error type, result alias and process exit statuses.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::inotify::FramingError;

/// Process exit statuses, one per failure condition.
///
/// Usage errors (e.g. a missing `<PATH>`) are reported by `clap` itself,
/// which exits with [`exit_code::USAGE`].
pub mod exit_code {
    pub const OTHER: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CHANNEL_OPEN: i32 = 3;
    pub const REGISTRATION: i32 = 4;
    pub const READ: i32 = 5;
    pub const MALFORMED_RECORD: i32 = 6;
    pub const TIMEOUT: i32 = 7;
}

#[derive(Error, Debug)]
pub enum WatchonceError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("failed to open inotify channel: {0}")]
    ChannelOpen(#[source] std::io::Error),

    #[error("failed to watch {path:?}: {source}")]
    Registration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read from inotify channel failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("malformed notification record: {0}")]
    MalformedRecord(#[from] FramingError),

    #[error("no event within {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WatchonceError {
    /// Exit status the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            WatchonceError::ChannelOpen(_) => exit_code::CHANNEL_OPEN,
            WatchonceError::Registration { .. } => exit_code::REGISTRATION,
            WatchonceError::Read(_) => exit_code::READ,
            WatchonceError::MalformedRecord(_) => exit_code::MALFORMED_RECORD,
            WatchonceError::Timeout(_) => exit_code::TIMEOUT,
            WatchonceError::ConfigError(_)
            | WatchonceError::IoError(_)
            | WatchonceError::TomlError(_)
            | WatchonceError::Other(_) => exit_code::OTHER,
        }
    }
}

pub type Result<T> = std::result::Result<T, WatchonceError>;
