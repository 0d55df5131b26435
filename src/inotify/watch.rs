// src/inotify/watch.rs

use tracing::debug;

use crate::inotify::channel::Channel;

/// Kernel identifier of a watch registration on one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchDescriptor(i32);

impl WatchDescriptor {
    pub fn from_raw(wd: i32) -> Self {
        Self(wd)
    }

    pub fn as_raw(self) -> i32 {
        self.0
    }
}

/// A registered watch.
///
/// Borrows the channel it was registered on, so it can never outlive it.
/// Dropping the handle removes the watch from the channel.
pub struct Watch<'channel> {
    channel: &'channel Channel,
    wd: WatchDescriptor,
}

impl<'channel> Watch<'channel> {
    pub(crate) fn new(channel: &'channel Channel, wd: WatchDescriptor) -> Self {
        Self { channel, wd }
    }

    pub fn descriptor(&self) -> WatchDescriptor {
        self.wd
    }
}

impl std::fmt::Debug for Watch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watch").field("wd", &self.wd).finish()
    }
}

impl Drop for Watch<'_> {
    fn drop(&mut self) {
        // EINVAL here just means the kernel already dropped the watch
        // (target deleted or unmounted).
        match self.channel.remove_watch(self.wd) {
            Ok(()) => debug!(wd = self.wd.as_raw(), "watch removed"),
            Err(err) => debug!(wd = self.wd.as_raw(), %err, "watch already gone"),
        }
    }
}
