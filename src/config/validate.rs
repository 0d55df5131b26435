// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, WatchonceError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::WatchonceError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.watch))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_events(cfg)?;
    validate_timeout(cfg)?;
    Ok(())
}

fn ensure_has_events(cfg: &RawConfigFile) -> Result<()> {
    if cfg.watch.events.is_empty() {
        return Err(WatchonceError::ConfigError(
            "[watch].events must list at least one event kind".to_string(),
        ));
    }
    Ok(())
}

fn validate_timeout(cfg: &RawConfigFile) -> Result<()> {
    if cfg.watch.timeout_secs == Some(0) {
        return Err(WatchonceError::ConfigError(
            "[watch].timeout_secs must be >= 1 (got 0); omit it to wait forever".to_string(),
        ));
    }
    Ok(())
}
