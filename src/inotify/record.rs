// src/inotify/record.rs

//! Decoding of a single raw inotify record.
//!
//! Wire layout (native endian), as defined by `struct inotify_event`:
//!
//! ```text
//! offset  size  field
//!      0     4  wd      (i32)
//!      4     4  mask    (u32)
//!      8     4  cookie  (u32)
//!     12     4  len     (u32, size of the trailing name incl. NUL padding)
//!     16   len  name    (optional, NUL terminated and padded)
//! ```

use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;

use thiserror::Error;

use crate::inotify::mask::EventMask;
use crate::inotify::watch::WatchDescriptor;

/// Size in bytes of the fixed record header.
pub const HEADER_SIZE: usize = 16;

/// Longest trailing name the decode buffer must hold (`FILENAME_MAX`).
pub const MAX_NAME_LEN: usize = 4096;

/// Size of the buffer handed to a single read: one header plus the longest
/// possible name, so any single record fits.
pub const RECORD_BUFFER_LEN: usize = HEADER_SIZE + MAX_NAME_LEN;

/// The bytes read from the channel do not form exactly one record.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingError {
    #[error("read {read} bytes, fewer than the {header}-byte record header")]
    Truncated { read: usize, header: usize },

    #[error("read {read} bytes but header and name length account for {expected}")]
    LengthMismatch { read: usize, expected: usize },
}

/// One decoded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub wd: WatchDescriptor,
    pub mask: EventMask,
    pub cookie: u32,
    /// Name of the entry inside a watched directory. Empty when the watch
    /// target itself is the subject of the event.
    pub name: OsString,
}

impl NotificationRecord {
    /// Decode `bytes`, which must be exactly what one read returned.
    ///
    /// Fails unless `bytes.len() == HEADER_SIZE + len`.
    pub fn decode(bytes: &[u8]) -> Result<Self, FramingError> {
        if bytes.len() < HEADER_SIZE {
            return Err(FramingError::Truncated {
                read: bytes.len(),
                header: HEADER_SIZE,
            });
        }

        let wd = i32::from_ne_bytes(field(bytes, 0));
        let mask = u32::from_ne_bytes(field(bytes, 4));
        let cookie = u32::from_ne_bytes(field(bytes, 8));
        let name_len = u32::from_ne_bytes(field(bytes, 12)) as usize;

        let expected = HEADER_SIZE.saturating_add(name_len);
        if bytes.len() != expected {
            return Err(FramingError::LengthMismatch {
                read: bytes.len(),
                expected,
            });
        }

        // Strip the NUL terminator and any alignment padding after it.
        let raw_name = &bytes[HEADER_SIZE..expected];
        let name = raw_name.split(|b| *b == 0).next().unwrap_or_default();

        Ok(Self {
            wd: WatchDescriptor::from_raw(wd),
            mask: EventMask::from_bits_retain(mask),
            cookie,
            name: OsString::from_vec(name.to_vec()),
        })
    }

    /// True if the record carries no trailing name.
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }
}

fn field(bytes: &[u8], offset: usize) -> [u8; 4] {
    [
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]
}
