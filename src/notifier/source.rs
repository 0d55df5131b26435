// src/notifier/source.rs

//! Pluggable notification source.
//!
//! - [`crate::inotify::Channel`] is the production implementation.
//! - Tests provide sources that replay scripted byte buffers or errors and
//!   count how many reads were issued.

use std::future::Future;
use std::io;
use std::pin::Pin;

/// Something a single notification batch can be read from.
pub trait NotificationSource: Sync {
    /// Fill `buf` with whatever one read returns and report the byte count.
    ///
    /// Implementations suspend until data is available. A returned count is
    /// always > 0 and never more than `buf.len()`; a larger count is treated
    /// as a failed read.
    fn read_into<'a>(
        &'a self,
        buf: &'a mut [u8],
    ) -> Pin<Box<dyn Future<Output = io::Result<usize>> + Send + 'a>>;
}
