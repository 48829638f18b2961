//! Run-time print control.
//!
//! [`PrintControl`] holds the threshold and scope mask as atomics so a
//! debugger, a console command or the application can retune output without
//! reflashing. Loads and stores are relaxed: the fields are independent and
//! nothing orders against them. Concurrent writers are not coordinated;
//! the last store wins.

use core::sync::atomic::{AtomicU16, Ordering};

use super::{PrintLevel, PrintScope};
use crate::config;

/// Threshold and scope consulted by the print gate.
#[derive(Debug)]
pub struct PrintControl {
    level: AtomicU16,
    scope: AtomicU16,
}

impl PrintControl {
    /// Create a control block with the given threshold and scope.
    pub const fn new(
        level: PrintLevel,
        scope: PrintScope,
    ) -> Self {
        Self {
            level: AtomicU16::new(level.as_raw()),
            scope: AtomicU16::new(scope.bits()),
        }
    }

    /// Current threshold.
    #[inline]
    pub fn level(&self) -> PrintLevel { PrintLevel::from_raw(self.level_raw()) }

    /// Current threshold as stored. May exceed the highest level when written
    /// through [`Self::set_level_raw`].
    #[inline]
    pub fn level_raw(&self) -> u16 { self.level.load(Ordering::Relaxed) }

    /// Current scope mask.
    #[inline]
    pub fn scope(&self) -> PrintScope { PrintScope::from_bits(self.scope.load(Ordering::Relaxed)) }

    pub fn set_level(
        &self,
        level: PrintLevel,
    ) {
        self.level.store(level.as_raw(), Ordering::Relaxed);
    }

    /// Store a raw threshold, e.g. a value poked in from a console.
    pub fn set_level_raw(
        &self,
        raw: u16,
    ) {
        self.level.store(raw, Ordering::Relaxed);
    }

    pub fn set_scope(
        &self,
        scope: PrintScope,
    ) {
        self.scope.store(scope.bits(), Ordering::Relaxed);
    }
}

impl Default for PrintControl {
    fn default() -> Self { Self::new(config::PRINT_LEVEL, config::PRINT_SCOPE) }
}

/// Process-wide control block used by the print macros when the
/// `runtime-print-level` feature is enabled.
pub static PRINT_CONTROL: PrintControl = PrintControl::new(config::PRINT_LEVEL, config::PRINT_SCOPE);

/// Threshold the print macros compare against: [`PRINT_CONTROL`] with the
/// `runtime-print-level` feature, [`config::PRINT_LEVEL`] otherwise.
#[inline]
pub fn active_level() -> PrintLevel {
    if config::RUNTIME_PRINT_LEVEL {
        PRINT_CONTROL.level()
    } else {
        config::PRINT_LEVEL
    }
}

/// Scope mask the scoped print macros compare against: [`PRINT_CONTROL`]
/// with the `runtime-print-level` feature, [`config::PRINT_SCOPE`] otherwise.
#[inline]
pub fn active_scope() -> PrintScope {
    if config::RUNTIME_PRINT_LEVEL {
        PRINT_CONTROL.scope()
    } else {
        config::PRINT_SCOPE
    }
}
