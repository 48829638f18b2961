//! Leveled, scoped debug printing.
//!
//! A call site carries a [`Verbosity`] tag and, for scoped calls, a
//! [`PrintScope`]. The gate compares them against the active threshold and
//! scope mask and forwards admitted messages, pre-formatted, to a
//! [`PrintSink`].
//!
//! Two ways in:
//!
//! - the `dprint*!` / `sprint*!` macros, which use the process-wide control
//!   block and sink and vanish entirely without the `debug-print` feature
//! - [`Printer`], an explicit control + sink pair for code that wants its
//!   logging context injected
//!
//! The threshold comes from [`config::PRINT_LEVEL`] at compile time, or from
//! [`PRINT_CONTROL`] with the `runtime-print-level` feature.
//!
//! [`config::PRINT_LEVEL`]: crate::config::PRINT_LEVEL

mod control;
pub mod gate;
mod level;
pub mod log_buffer;
mod macros;
mod printer;
mod scope;
mod sink;

pub use control::{PRINT_CONTROL, PrintControl, active_level, active_scope};
pub use level::{PrintLevel, Verbosity};
pub use log_buffer::{LogBuffer, LogEntry, SharedLogBuffer};
pub use printer::Printer;
pub use scope::PrintScope;
#[cfg(target_arch = "arm")]
pub use sink::DefmtSink;
pub use sink::{Message, NullSink, PrintSink, clear_sink, format_message, set_sink, sink, write_global};
