//! Firmware utility library - leveled debug printing, bit/alignment helpers
//! and portable type shims.
//!
//! Three independent parts, each usable on its own:
//!
//! - [`print`]: compile-time or run-time gated debug output with severity
//!   levels and 16-bit scope masks (`dprint*!` / `sprint*!` macros, or an
//!   injected [`print::Printer`])
//! - [`ops`], [`align`], [`bits`], [`fourcc`], [`list`], [`util`]: clipping,
//!   min/max/abs, alignment rounding, bit manipulation, four-character codes,
//!   an index-linked list and small structural helpers
//! - [`types`], [`endian`]: function-pointer aliases, null constants,
//!   allocation alignment units and network byte-order conversion
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! cargo test --lib --features debug-print,runtime-print-level,little-endian
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while firmware builds stay
//! `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod error;

// Print gate
pub mod print;

// Generic helpers
pub mod align;
pub mod bits;
pub mod fourcc;
pub mod list;
pub mod ops;
pub mod util;

// Type shim
pub mod endian;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use fourcc::{FourCc, fourcc};
pub use print::{PrintControl, PrintLevel, PrintScope, PrintSink, Printer, Verbosity};
