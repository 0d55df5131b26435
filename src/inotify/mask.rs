// src/inotify/mask.rs

use bitflags::bitflags;

bitflags! {
    /// Event bits as used by `inotify_add_watch(2)` and reported in the
    /// `mask` field of each record.
    ///
    /// Values are the kernel ABI constants from `<sys/inotify.h>`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventMask: u32 {
        const ACCESS = 0x0000_0001;
        const MODIFY = 0x0000_0002;
        const ATTRIB = 0x0000_0004;
        const CLOSE_WRITE = 0x0000_0008;
        const CLOSE_NOWRITE = 0x0000_0010;
        const OPEN = 0x0000_0020;
        const MOVED_FROM = 0x0000_0040;
        const MOVED_TO = 0x0000_0080;
        const CREATE = 0x0000_0100;
        const DELETE = 0x0000_0200;
        const DELETE_SELF = 0x0000_0400;
        const MOVE_SELF = 0x0000_0800;

        // Set by the kernel on delivered records only.
        const UNMOUNT = 0x0000_2000;
        const Q_OVERFLOW = 0x0000_4000;
        const IGNORED = 0x0000_8000;
        const ISDIR = 0x4000_0000;

        // Watch options, only meaningful when registering.
        const ONLYDIR = 0x0100_0000;
        const DONT_FOLLOW = 0x0200_0000;
        const EXCL_UNLINK = 0x0400_0000;
        const MASK_ADD = 0x2000_0000;
        const ONESHOT = 0x8000_0000;

        const CLOSE = Self::CLOSE_WRITE.bits() | Self::CLOSE_NOWRITE.bits();
        const MOVE = Self::MOVED_FROM.bits() | Self::MOVED_TO.bits();
    }
}

impl EventMask {
    /// True if the record describes a file opened for writing being closed.
    pub fn is_close_write(self) -> bool {
        self.contains(EventMask::CLOSE_WRITE)
    }

    /// Human-readable names of the set (known) flags, for logging.
    pub fn flag_names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}
