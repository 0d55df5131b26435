use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::inotify::EventMask;

/// A kind of filesystem event a watch can be registered for.
///
/// On the command line these are spelled in kebab-case (`close-write`), in
/// the config file in snake_case (`close_write`). `FromStr` accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Access,
    Modify,
    Attrib,
    CloseWrite,
    CloseNowrite,
    Open,
    MovedFrom,
    MovedTo,
    Create,
    Delete,
    DeleteSelf,
    MoveSelf,
}

impl EventKind {
    /// The inotify bit for this event kind.
    pub fn mask(self) -> EventMask {
        match self {
            EventKind::Access => EventMask::ACCESS,
            EventKind::Modify => EventMask::MODIFY,
            EventKind::Attrib => EventMask::ATTRIB,
            EventKind::CloseWrite => EventMask::CLOSE_WRITE,
            EventKind::CloseNowrite => EventMask::CLOSE_NOWRITE,
            EventKind::Open => EventMask::OPEN,
            EventKind::MovedFrom => EventMask::MOVED_FROM,
            EventKind::MovedTo => EventMask::MOVED_TO,
            EventKind::Create => EventMask::CREATE,
            EventKind::Delete => EventMask::DELETE,
            EventKind::DeleteSelf => EventMask::DELETE_SELF,
            EventKind::MoveSelf => EventMask::MOVE_SELF,
        }
    }

    /// Combine a set of kinds into a single watch mask.
    pub fn combined_mask(kinds: &[EventKind]) -> EventMask {
        kinds
            .iter()
            .fold(EventMask::empty(), |acc, kind| acc | kind.mask())
    }
}

impl Default for EventKind {
    fn default() -> Self {
        EventKind::CloseWrite
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "access" => Ok(EventKind::Access),
            "modify" => Ok(EventKind::Modify),
            "attrib" => Ok(EventKind::Attrib),
            "close_write" => Ok(EventKind::CloseWrite),
            "close_nowrite" => Ok(EventKind::CloseNowrite),
            "open" => Ok(EventKind::Open),
            "moved_from" => Ok(EventKind::MovedFrom),
            "moved_to" => Ok(EventKind::MovedTo),
            "create" => Ok(EventKind::Create),
            "delete" => Ok(EventKind::Delete),
            "delete_self" => Ok(EventKind::DeleteSelf),
            "move_self" => Ok(EventKind::MoveSelf),
            other => Err(format!("invalid event kind: {other}")),
        }
    }
}
