// src/inotify/channel.rs

use std::ffi::CString;
use std::future::Future;
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::pin::Pin;

use tokio::io::Interest;
use tokio::io::unix::AsyncFd;
use tracing::{debug, trace};

use crate::inotify::mask::EventMask;
use crate::inotify::watch::{Watch, WatchDescriptor};
use crate::notifier::NotificationSource;

/// An open inotify instance.
///
/// The descriptor is non-blocking and registered with the Tokio reactor, so
/// [`Channel::open`] must be called from within a runtime. It is closed when
/// the `Channel` is dropped.
pub struct Channel {
    fd: AsyncFd<OwnedFd>,
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("fd", &self.fd.get_ref().as_raw_fd())
            .finish()
    }
}

impl Channel {
    /// Open a new inotify instance.
    pub fn open() -> io::Result<Self> {
        let raw = unsafe { libc::inotify_init1(libc::IN_CLOEXEC | libc::IN_NONBLOCK) };
        if raw == -1 {
            return Err(io::Error::last_os_error());
        }

        // SAFETY: `raw` is a freshly created descriptor that nothing else owns.
        let owned = unsafe { OwnedFd::from_raw_fd(raw) };
        let fd = AsyncFd::with_interest(owned, Interest::READABLE)?;

        debug!(fd = raw, "inotify channel opened");
        Ok(Self { fd })
    }

    /// Register interest in `mask` events on `path`.
    ///
    /// The path is not checked beforehand; whatever `inotify_add_watch(2)`
    /// reports (missing path, permissions, `ONLYDIR` on a file) is returned
    /// as the error.
    pub fn watch(&self, path: &Path, mask: EventMask) -> io::Result<Watch<'_>> {
        let c_path = CString::new(path.as_os_str().as_bytes())?;

        let wd = unsafe {
            libc::inotify_add_watch(self.raw_fd(), c_path.as_ptr(), mask.bits())
        };
        if wd == -1 {
            return Err(io::Error::last_os_error());
        }

        debug!(wd, ?path, flags = ?mask.flag_names(), "watch registered");
        Ok(Watch::new(self, WatchDescriptor::from_raw(wd)))
    }

    pub(crate) fn remove_watch(&self, wd: WatchDescriptor) -> io::Result<()> {
        let result = unsafe { libc::inotify_rm_watch(self.raw_fd(), wd.as_raw()) };
        match result {
            0 => Ok(()),
            _ => Err(io::Error::last_os_error()),
        }
    }

    fn raw_fd(&self) -> RawFd {
        self.fd.get_ref().as_raw_fd()
    }

    /// Wait until the channel is readable, then perform one `read(2)`.
    async fn read_once(&self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let mut guard = self.fd.readable().await?;

            match guard.try_io(|inner| read_raw(inner.get_ref().as_raw_fd(), &mut *buf)) {
                Ok(result) => return result,
                // Spurious wakeup; readiness has been cleared, wait again.
                Err(_would_block) => {
                    trace!("inotify channel not ready yet");
                    continue;
                }
            }
        }
    }
}

impl NotificationSource for Channel {
    fn read_into<'a>(
        &'a self,
        buf: &'a mut [u8],
    ) -> Pin<Box<dyn Future<Output = io::Result<usize>> + Send + 'a>> {
        Box::pin(self.read_once(buf))
    }
}

fn read_raw(fd: RawFd, buf: &mut [u8]) -> io::Result<usize> {
    let n = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), buf.len()) };
    match n {
        -1 => Err(io::Error::last_os_error()),
        0 => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "read on inotify channel returned 0",
        )),
        n => Ok(n as usize),
    }
}
