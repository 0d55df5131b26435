// src/notifier/report.rs

use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use crate::inotify::NotificationRecord;

pub const REPORT_PREFIX: &str = "Got inotify event on file ";

/// Write the single report line for `record`.
///
/// The name is written as raw bytes so non-UTF-8 file names survive intact.
pub fn write_report<W: Write>(out: &mut W, record: &NotificationRecord) -> std::io::Result<()> {
    out.write_all(REPORT_PREFIX.as_bytes())?;
    out.write_all(record.name.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
