//! Ring buffer of recent print messages.
//!
//! Keeps the last [`LOG_ENTRIES`] admitted messages so they can be shown on
//! a status page, dumped from a console, or read back by a debugger after a
//! fault. Each entry records the call's verbosity tag and a sequence number
//! that keeps counting past overwritten entries, so gaps are visible.
//!
//! # Usage
//!
//! ```ignore
//! static LOG: SharedLogBuffer = SharedLogBuffer::new();
//!
//! ucutil::print::set_sink(&LOG);
//! ucutil::dprinti!("link up");
//!
//! LOG.with(|buf| {
//!     for entry in buf.iter() {
//!         // entry.tag.prefix(), entry.seq, entry.message
//!     }
//! });
//! ```

use core::cell::RefCell;
use core::iter::{Cycle, Skip, Take};
use core::slice;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use heapless::String;

use super::sink::format_message;
use super::{PrintSink, Verbosity};
pub use crate::config::{LOG_ENTRIES, LOG_MSG_LEN};

/// One recorded message.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub tag: Verbosity,
    /// Cut at a char boundary to fit LOG_MSG_LEN bytes.
    pub message: String<LOG_MSG_LEN>,
    /// Number of messages pushed before this one.
    pub seq: u32,
}

impl LogEntry {
    pub fn new(
        tag: Verbosity,
        message: &str,
        seq: u32,
    ) -> Self {
        Self {
            tag,
            message: format_message(format_args!("{message}")),
            seq,
        }
    }
}

const BLANK: LogEntry = LogEntry {
    tag: Verbosity::Always,
    message: String::new(),
    seq: 0,
};

/// Fixed ring of the most recent [`LOG_ENTRIES`] messages.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    /// Slot the next push overwrites.
    cursor: usize,
    len: usize,
    next_seq: u32,
}

impl LogBuffer {
    pub const fn new() -> Self {
        Self {
            entries: [BLANK; LOG_ENTRIES],
            cursor: 0,
            len: 0,
            next_seq: 0,
        }
    }

    /// Record a message, replacing the oldest one once the ring is full.
    pub fn push(
        &mut self,
        tag: Verbosity,
        message: &str,
    ) {
        let seq = self.next_seq;
        self.next_seq = seq.wrapping_add(1);

        self.entries[self.cursor] = LogEntry::new(tag, message, seq);
        self.cursor = Self::wrap(self.cursor + 1);
        self.len = (self.len + 1).min(LOG_ENTRIES);
    }

    #[inline]
    pub const fn len(&self) -> usize { self.len }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Total number of messages ever pushed (wrapping).
    #[inline]
    pub const fn pushed(&self) -> u32 { self.next_seq }

    /// Forget every entry. Sequence numbers continue where they left off.
    pub fn clear(&mut self) { self.len = 0; }

    pub fn latest(&self) -> Option<&LogEntry> {
        if self.is_empty() {
            return None;
        }
        self.entries.get(Self::wrap(self.cursor + LOG_ENTRIES - 1))
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let oldest = Self::wrap(self.cursor + LOG_ENTRIES - self.len);
        LogBufferIter {
            inner: self.entries.iter().cycle().skip(oldest).take(self.len),
        }
    }

    #[inline]
    const fn wrap(slot: usize) -> usize { slot % LOG_ENTRIES }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

impl<'a> IntoIterator for &'a LogBuffer {
    type Item = &'a LogEntry;
    type IntoIter = LogBufferIter<'a>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Oldest-first walk over a [`LogBuffer`].
pub struct LogBufferIter<'a> {
    inner: Take<Skip<Cycle<slice::Iter<'a, LogEntry>>>>,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.inner.next() }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl ExactSizeIterator for LogBufferIter<'_> {}

/// [`LogBuffer`] behind a critical-section mutex, usable as a `'static` sink.
pub struct SharedLogBuffer {
    inner: Mutex<CriticalSectionRawMutex, RefCell<LogBuffer>>,
}

impl SharedLogBuffer {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(LogBuffer::new())),
        }
    }

    /// Run `f` with the buffer borrowed.
    ///
    /// # Panics
    /// If `f` writes to this same buffer (re-entrant borrow).
    pub fn with<R>(
        &self,
        f: impl FnOnce(&LogBuffer) -> R,
    ) -> R {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    pub fn clear(&self) { self.inner.lock(|cell| cell.borrow_mut().clear()); }
}

impl Default for SharedLogBuffer {
    fn default() -> Self { Self::new() }
}

impl PrintSink for SharedLogBuffer {
    fn write(
        &self,
        tag: Verbosity,
        msg: &str,
    ) {
        self.inner.lock(|cell| {
            // A sink called from inside `with` would re-borrow; drop the message instead.
            if let Ok(mut buffer) = cell.try_borrow_mut() {
                buffer.push(tag, msg);
            }
        });
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut log = LogBuffer::new();
        assert!(log.is_empty());

        log.push(Verbosity::Info, "first");
        log.push(Verbosity::Warn, "second");
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().message.as_str(), "second");
        assert_eq!(log.latest().unwrap().tag, Verbosity::Warn);
    }

    #[test]
    fn test_ring_overwrites_oldest() {
        let mut log = LogBuffer::new();
        for _ in 0..LOG_ENTRIES {
            log.push(Verbosity::Debug, "old");
        }
        log.push(Verbosity::Info, "new");

        assert_eq!(log.len(), LOG_ENTRIES);
        assert_eq!(log.pushed(), LOG_ENTRIES as u32 + 1);

        let first = log.iter().next().unwrap();
        assert_eq!(first.seq, 1);
        let last = log.iter().last().unwrap();
        assert_eq!(last.message.as_str(), "new");
        assert_eq!(last.seq, LOG_ENTRIES as u32);
    }

    #[test]
    fn test_iter_order_before_wrap() {
        let mut log = LogBuffer::new();
        log.push(Verbosity::Info, "a");
        log.push(Verbosity::Info, "b");
        log.push(Verbosity::Info, "c");

        let seqs: Vec<u32> = log.iter().map(|e| e.seq).collect();
        assert_eq!(seqs, [0, 1, 2]);
        assert_eq!(log.iter().len(), 3);
    }

    #[test]
    fn test_iter_order_after_wrap() {
        let mut log = LogBuffer::new();
        for _ in 0..LOG_ENTRIES + 3 {
            log.push(Verbosity::Info, "m");
        }

        let seqs: Vec<u32> = log.iter().map(|e| e.seq).collect();
        let expected: Vec<u32> = (3..LOG_ENTRIES as u32 + 3).collect();
        assert_eq!(seqs, expected);
        assert_eq!(log.iter().len(), LOG_ENTRIES);
    }

    #[test]
    fn test_clear_after_wrap_then_push() {
        let mut log = LogBuffer::new();
        for _ in 0..LOG_ENTRIES + 5 {
            log.push(Verbosity::Debug, "old");
        }
        log.clear();
        log.push(Verbosity::Warn, "x");
        log.push(Verbosity::Warn, "y");

        let msgs: Vec<&str> = (&log).into_iter().map(|e| e.message.as_str()).collect();
        assert_eq!(msgs, ["x", "y"]);
        assert_eq!(log.latest().unwrap().seq, LOG_ENTRIES as u32 + 6);
    }

    #[test]
    fn test_truncation_keeps_char_boundary() {
        let mut log = LogBuffer::new();
        let wide = "\u{e9}".repeat(LOG_MSG_LEN);
        log.push(Verbosity::Info, &wide);
        let kept = &log.latest().unwrap().message;
        assert!(kept.len() >= LOG_MSG_LEN - 1);
        assert!(kept.chars().all(|c| c == '\u{e9}'));
    }

    #[test]
    fn test_truncation() {
        let mut log = LogBuffer::new();
        let long_msg = "x".repeat(LOG_MSG_LEN * 2);
        log.push(Verbosity::Info, &long_msg);
        assert_eq!(log.latest().unwrap().message.len(), LOG_MSG_LEN);
    }

    #[test]
    fn test_clear_keeps_sequence() {
        let mut log = LogBuffer::new();
        log.push(Verbosity::Info, "a");
        log.clear();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        log.push(Verbosity::Info, "b");
        assert_eq!(log.latest().unwrap().seq, 1);
    }

    #[test]
    fn test_shared_buffer_as_sink() {
        let shared = SharedLogBuffer::new();
        shared.write(Verbosity::Warn, "overheat");
        shared.with(|buf| {
            assert_eq!(buf.len(), 1);
            assert_eq!(buf.latest().unwrap().message.as_str(), "overheat");
        });
        shared.clear();
        shared.with(|buf| assert!(buf.is_empty()));
    }

    #[test]
    fn test_shared_buffer_reentrant_write_is_dropped() {
        let shared = SharedLogBuffer::new();
        shared.with(|_| shared.write(Verbosity::Info, "inside"));
        shared.with(|buf| assert!(buf.is_empty()));
    }
}
