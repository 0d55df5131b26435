// tests/config_loading.rs

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::NamedTempFile;

use watchonce::config::{load_and_validate, WatchSettings};
use watchonce::errors::WatchonceError;
use watchonce::inotify::EventMask;
use watchonce::types::EventKind;
use watchonce_test_utils::builders::{cli_args, ConfigFileBuilder};

type TestResult = Result<(), Box<dyn Error>>;

fn config_file(contents: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{contents}")?;
    Ok(file)
}

#[test]
fn empty_file_uses_defaults() -> TestResult {
    let file = config_file("")?;
    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.watch.events, vec![EventKind::CloseWrite]);
    assert_eq!(cfg.watch.timeout_secs, None);
    assert!(!cfg.watch.only_dir);
    assert!(!cfg.watch.dont_follow);
    Ok(())
}

#[test]
fn full_watch_section_is_read() -> TestResult {
    let file = config_file(
        r#"
[watch]
events = ["close_write", "moved_to"]
timeout_secs = 30
only_dir = true
dont_follow = true
"#,
    )?;
    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.watch.events, vec![EventKind::CloseWrite, EventKind::MovedTo]);
    assert_eq!(cfg.watch.timeout_secs, Some(30));
    assert!(cfg.watch.only_dir);
    assert!(cfg.watch.dont_follow);
    Ok(())
}

#[test]
fn empty_events_is_a_config_error() -> TestResult {
    let file = config_file("[watch]\nevents = []\n")?;

    match load_and_validate(file.path()) {
        Err(WatchonceError::ConfigError(msg)) => assert!(msg.contains("[watch].events")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
    Ok(())
}

#[test]
fn zero_timeout_is_a_config_error() -> TestResult {
    let file = config_file("[watch]\ntimeout_secs = 0\n")?;

    match load_and_validate(file.path()) {
        Err(WatchonceError::ConfigError(msg)) => assert!(msg.contains("timeout_secs")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
    Ok(())
}

#[test]
fn unknown_event_name_is_a_toml_error() -> TestResult {
    let file = config_file("[watch]\nevents = [\"close-write\"]\n")?;

    assert!(matches!(
        load_and_validate(file.path()),
        Err(WatchonceError::TomlError(_))
    ));
    Ok(())
}

#[test]
fn unknown_keys_are_rejected() -> TestResult {
    let file = config_file("[watch]\nrecursive = true\n")?;

    assert!(matches!(
        load_and_validate(file.path()),
        Err(WatchonceError::TomlError(_))
    ));
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let result = load_and_validate(PathBuf::from("/nonexistent/watchonce.toml"));
    assert!(matches!(result, Err(WatchonceError::IoError(_))));
}

#[test]
fn settings_default_to_close_write_forever() {
    let settings = WatchSettings::resolve(&cli_args("dir"), None);

    assert_eq!(settings.path, PathBuf::from("dir"));
    assert_eq!(settings.mask, EventMask::CLOSE_WRITE);
    assert_eq!(settings.timeout, None);
}

#[test]
fn settings_take_file_values_when_cli_is_silent() {
    let cfg = ConfigFileBuilder::new()
        .events(&[EventKind::Create, EventKind::Delete])
        .timeout_secs(9)
        .dont_follow(true)
        .build();

    let settings = WatchSettings::resolve(&cli_args("dir"), Some(&cfg));

    assert_eq!(
        settings.mask,
        EventMask::CREATE | EventMask::DELETE | EventMask::DONT_FOLLOW
    );
    assert_eq!(settings.timeout, Some(Duration::from_secs(9)));
}

#[test]
fn cli_flags_override_the_file() {
    let cfg = ConfigFileBuilder::new()
        .events(&[EventKind::Create])
        .timeout_secs(9)
        .build();

    let mut args = cli_args("dir");
    args.events = vec![EventKind::Modify];
    args.timeout = Some(2);
    args.only_dir = true;

    let settings = WatchSettings::resolve(&args, Some(&cfg));

    assert_eq!(settings.mask, EventMask::MODIFY | EventMask::ONLYDIR);
    assert_eq!(settings.timeout, Some(Duration::from_secs(2)));
}
