// src/notifier/runtime.rs

use std::io::Write;
use std::time::Duration;

use tracing::{debug, info};

use crate::errors::{Result, WatchonceError};
use crate::inotify::{NotificationRecord, RECORD_BUFFER_LEN};
use crate::notifier::report::write_report;
use crate::notifier::source::NotificationSource;

/// Wait for one notification on `source`, decode it and report it to `out`.
///
/// Exactly one read is issued. Nothing is written unless the read succeeded
/// and the bytes decode as exactly one record. With `timeout` set, giving up
/// is reported as [`WatchonceError::Timeout`].
pub async fn notify_once<S, W>(
    source: &S,
    out: &mut W,
    timeout: Option<Duration>,
) -> Result<NotificationRecord>
where
    S: NotificationSource + ?Sized,
    W: Write,
{
    let mut buf = vec![0u8; RECORD_BUFFER_LEN];

    debug!(buffer_len = buf.len(), ?timeout, "waiting for one notification");
    let read = match timeout {
        Some(limit) => tokio::time::timeout(limit, source.read_into(&mut buf))
            .await
            .map_err(|_| WatchonceError::Timeout(limit))?,
        None => source.read_into(&mut buf).await,
    };
    let read = read.map_err(WatchonceError::Read)?;
    if read > buf.len() {
        return Err(WatchonceError::Read(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("source reported {read} bytes for a {}-byte buffer", buf.len()),
        )));
    }

    let record = NotificationRecord::decode(&buf[..read])?;
    info!(
        wd = record.wd.as_raw(),
        flags = ?record.mask.flag_names(),
        cookie = record.cookie,
        name = ?record.name,
        "notification received"
    );

    write_report(out, &record)?;
    Ok(record)
}
