//! Output sinks.
//!
//! A [`PrintSink`] is the primitive the gate forwards admitted messages to.
//! Messages arrive already formatted, so sinks never see format arguments.
//!
//! The print macros write to one globally registered sink:
//!
//! ```ignore
//! static LOG: SharedLogBuffer = SharedLogBuffer::new();
//!
//! ucutil::print::set_sink(&LOG);
//! ucutil::dprintw!("battery low: {} mV", mv);
//! ```

use core::cell::Cell;
use core::fmt::{self, Write};

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use heapless::String;

use super::Verbosity;
use crate::config::PRINT_MSG_LEN;

/// Destination for admitted print messages.
pub trait PrintSink: Sync {
    /// Write one formatted message.
    fn write(
        &self,
        tag: Verbosity,
        msg: &str,
    );
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PrintSink for NullSink {
    fn write(
        &self,
        _tag: Verbosity,
        _msg: &str,
    ) {
    }
}

/// Sink forwarding to the defmt transport (usually RTT).
#[cfg(target_arch = "arm")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtSink;

#[cfg(target_arch = "arm")]
impl PrintSink for DefmtSink {
    fn write(
        &self,
        tag: Verbosity,
        msg: &str,
    ) {
        defmt::println!("[{=char}] {=str}", tag.prefix(), msg);
    }
}

// =============================================================================
// Message Formatting
// =============================================================================

/// Formatted message buffer handed to sinks.
pub type Message = String<PRINT_MSG_LEN>;

/// `fmt::Write` adapter that keeps as much as fits and never errors.
struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        if self.0.push_str(s).is_err() {
            for c in s.chars() {
                if self.0.push(c).is_err() {
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Format `args` into a bounded string, truncating at a char boundary.
pub fn format_message<const N: usize>(args: fmt::Arguments<'_>) -> String<N> {
    let mut msg = String::new();
    // Truncating never returns Err; a Display impl that fails just ends the message early.
    let _ = Truncating(&mut msg).write_fmt(args);
    msg
}

// =============================================================================
// Global Sink
// =============================================================================

static SINK: Mutex<CriticalSectionRawMutex, Cell<Option<&'static dyn PrintSink>>> = Mutex::new(Cell::new(None));

/// Register the sink used by the print macros, replacing any previous one.
pub fn set_sink(sink: &'static dyn PrintSink) { SINK.lock(|slot| slot.set(Some(sink))); }

/// Unregister the global sink. Admitted messages are dropped until a new
/// sink is set.
pub fn clear_sink() { SINK.lock(|slot| slot.set(None)); }

/// Currently registered global sink.
pub fn sink() -> Option<&'static dyn PrintSink> { SINK.lock(Cell::get) }

/// Format and write to the global sink. Returns false when no sink is set.
///
/// Callers are expected to have checked the gate already; the macros do.
pub fn write_global(
    tag: Verbosity,
    args: fmt::Arguments<'_>,
) -> bool {
    match sink() {
        Some(sink) => {
            let msg: Message = format_message(args);
            sink.write(tag, &msg);
            true
        }
        None => false,
    }
}
