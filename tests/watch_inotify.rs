// tests/watch_inotify.rs

//! Round trips through a real inotify channel on scratch paths.

mod common;
use crate::common::write_and_close;

use std::error::Error;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::future::Future;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::pin::Pin;
use std::time::Duration;

use tempfile::tempdir;

use watchonce::errors::{exit_code, WatchonceError};
use watchonce::inotify::{Channel, EventMask, FramingError, HEADER_SIZE};
use watchonce::notifier::{notify_once, NotificationSource};
use watchonce_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn directory_watch_reports_entry_name() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let channel = Channel::open()?;
    let _watch = channel.watch(dir.path(), EventMask::CLOSE_WRITE)?;

    write_and_close(&dir.path().join("probe.txt"))?;

    let mut out = Vec::new();
    let record = with_timeout(notify_once(&channel, &mut out, None)).await?;

    assert_eq!(record.name, OsString::from("probe.txt"));
    assert!(record.mask.is_close_write());
    assert!(!record.mask.contains(EventMask::ISDIR));
    assert_eq!(out, b"Got inotify event on file probe.txt\n");
    Ok(())
}

#[tokio::test]
async fn plain_file_watch_reports_empty_name() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let file = dir.path().join("watched.log");
    fs::write(&file, b"before")?;

    let channel = Channel::open()?;
    let watch = channel.watch(&file, EventMask::CLOSE_WRITE)?;

    write_and_close(&file)?;

    let mut out = Vec::new();
    let record = with_timeout(notify_once(&channel, &mut out, None)).await?;

    assert!(record.is_unnamed());
    assert_eq!(record.wd, watch.descriptor());
    assert_eq!(out, b"Got inotify event on file \n");
    Ok(())
}

#[tokio::test]
async fn events_outside_the_mask_are_not_reported() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let channel = Channel::open()?;
    let _watch = channel.watch(dir.path(), EventMask::CLOSE_WRITE)?;

    // Only CREATE/DELETE, no write-close.
    fs::create_dir(dir.path().join("sub"))?;
    fs::remove_dir(dir.path().join("sub"))?;

    let mut out = Vec::new();
    let result = notify_once(&channel, &mut out, Some(Duration::from_millis(200))).await;

    assert!(matches!(result, Err(WatchonceError::Timeout(_))));
    assert!(out.is_empty());
    Ok(())
}

#[tokio::test]
async fn two_queued_records_in_one_read_are_malformed() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let channel = Channel::open()?;
    let _watch = channel.watch(dir.path(), EventMask::CLOSE_WRITE)?;

    write_and_close(&dir.path().join("one.txt"))?;
    write_and_close(&dir.path().join("two.txt"))?;

    let mut out = Vec::new();
    let result = with_timeout(notify_once(&channel, &mut out, None)).await;

    match result {
        Err(WatchonceError::MalformedRecord(FramingError::LengthMismatch { read, expected })) => {
            assert!(read > expected);
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
    assert!(out.is_empty());
    Ok(())
}

#[tokio::test]
async fn dropping_the_watch_releases_it() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let channel = Channel::open()?;
    let watch = channel.watch(dir.path(), EventMask::CLOSE_WRITE)?;
    let wd = watch.descriptor();
    drop(watch);

    // Removal makes the kernel queue an IGNORED record for that descriptor.
    let mut out = Vec::new();
    let record = with_timeout(notify_once(&channel, &mut out, None)).await?;

    assert!(record.mask.contains(EventMask::IGNORED));
    assert_eq!(record.wd, wd);
    assert!(record.is_unnamed());
    Ok(())
}

/// Reads from a real channel through a buffer too small for one record.
struct UndersizedReads<'c>(&'c Channel);

impl NotificationSource for UndersizedReads<'_> {
    fn read_into<'a>(
        &'a self,
        buf: &'a mut [u8],
    ) -> Pin<Box<dyn Future<Output = io::Result<usize>> + Send + 'a>> {
        self.0.read_into(&mut buf[..HEADER_SIZE / 2])
    }
}

#[tokio::test]
async fn failed_channel_read_is_fatal_and_prints_nothing() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let channel = Channel::open()?;
    let _watch = channel.watch(dir.path(), EventMask::CLOSE_WRITE)?;

    write_and_close(&dir.path().join("queued.txt"))?;

    let mut out = Vec::new();
    let err = with_timeout(notify_once(&UndersizedReads(&channel), &mut out, None))
        .await
        .unwrap_err();

    match &err {
        WatchonceError::Read(io_err) => assert_eq!(io_err.raw_os_error(), Some(libc::EINVAL)),
        other => panic!("expected Read error, got {other:?}"),
    }
    assert_eq!(err.exit_code(), exit_code::READ);
    assert!(out.is_empty());
    Ok(())
}

#[tokio::test]
async fn interior_nul_in_path_is_invalid_input() -> TestResult {
    init_tracing();

    let channel = Channel::open()?;
    let path = Path::new(OsStr::from_bytes(b"/tmp/a\0b"));

    let err = channel.watch(path, EventMask::CLOSE_WRITE).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    Ok(())
}
