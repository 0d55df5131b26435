// src/inotify/mod.rs

//! Thin, scoped wrappers around the Linux inotify facility.
//!
//! This module is responsible for:
//! - Opening a notification channel (`Channel`) and registering watches on it
//!   (`Watch`), both released when they go out of scope.
//! - Decoding a single raw notification record read from the channel.
//!
//! It does **not** decide how many events to read or what to print; that is
//! the notifier's job.

pub mod channel;
pub mod mask;
pub mod record;
pub mod watch;

pub use channel::Channel;
pub use mask::EventMask;
pub use record::{
    FramingError, NotificationRecord, HEADER_SIZE, MAX_NAME_LEN, RECORD_BUFFER_LEN,
};
pub use watch::{Watch, WatchDescriptor};
