// src/notifier/mod.rs

//! The watch-once procedure.
//!
//! The notifier reads exactly one batch from a [`NotificationSource`],
//! decodes it as a single record and writes one report line. Everything
//! that owns OS resources (channel, watch) lives in [`crate::inotify`]; the
//! notifier only sees the source trait, which is what lets tests drive it
//! with scripted reads.

pub mod report;
pub mod runtime;
pub mod source;

pub use report::{write_report, REPORT_PREFIX};
pub use runtime::notify_once;
pub use source::NotificationSource;
