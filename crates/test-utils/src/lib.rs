//! Shared helpers for watchonce's integration tests: scripted notification
//! sources, raw record and config builders, and tracing setup.

pub mod builders;
pub mod scripted_source;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// How long a test may wait on a real inotify channel before failing.
pub const CHANNEL_WAIT: Duration = Duration::from_secs(5);

/// Install a test-captured subscriber once per test binary.
///
/// Defaults to debug output from the `watchonce` crate only, so channel,
/// watch and decode logs show up next to a failing test. `RUST_LOG`
/// overrides the filter.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("watchonce=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, failing the test if nothing arrives within [`CHANNEL_WAIT`].
///
/// Guards tests that block on a real channel, where a missed event would
/// otherwise hang the run.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(CHANNEL_WAIT, f)
        .await
        .unwrap_or_else(|_| panic!("no notification within {CHANNEL_WAIT:?}"))
}
