use std::collections::VecDeque;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use watchonce::notifier::NotificationSource;

/// A fake notification source that:
/// - replays a scripted list of read results, one per `read_into` call
/// - records how many reads were issued
///
/// Once the script is exhausted further reads fail, so an unexpected extra
/// read shows up as an error rather than a hang.
pub struct ScriptedSource {
    script: Mutex<VecDeque<io::Result<Vec<u8>>>>,
    reads: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            reads: AtomicUsize::new(0),
        }
    }

    /// Queue a successful read returning exactly `bytes`.
    pub fn then_bytes(self, bytes: impl Into<Vec<u8>>) -> Self {
        self.script.lock().unwrap().push_back(Ok(bytes.into()));
        self
    }

    /// Queue a failed read.
    pub fn then_error(self, err: io::Error) -> Self {
        self.script.lock().unwrap().push_back(Err(err));
        self
    }

    /// Number of `read_into` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of scripted results not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSource for ScriptedSource {
    fn read_into<'a>(
        &'a self,
        buf: &'a mut [u8],
    ) -> Pin<Box<dyn Future<Output = io::Result<usize>> + Send + 'a>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();

        Box::pin(async move {
            match next {
                Some(Ok(bytes)) => {
                    let n = bytes.len().min(buf.len());
                    buf[..n].copy_from_slice(&bytes[..n]);
                    Ok(n)
                }
                Some(Err(err)) => Err(err),
                None => Err(io::Error::other("scripted source exhausted")),
            }
        })
    }
}
