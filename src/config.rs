//! Compile-time configuration.
//!
//! Values are selected through Cargo features and validated with `const`
//! assertions, so a bad combination fails the build instead of misbehaving
//! on the target.
//!
//! # Features
//!
//! | Feature                 | Effect                                              |
//! |-------------------------|-----------------------------------------------------|
//! | `debug-print`           | `dprint*!` / `sprint*!` macros produce output        |
//! | `runtime-print-level`   | threshold and scope read from `PRINT_CONTROL`        |
//! | `print-level-<level>`   | compile-time threshold (`none`..`all`)              |
//! | `print-scope-areaNN`    | compile-time scope area `NN` (`00`..`15`)           |
//! | `big-endian`            | `hton*` / `ntoh*` are identity                      |
//! | `little-endian`         | `hton*` / `ntoh*` swap bytes                        |

use crate::print::{PrintLevel, PrintScope};

// =============================================================================
// Print Gate
// =============================================================================

/// True when the print macros are compiled in.
pub const DEBUG_PRINT: bool = cfg!(feature = "debug-print");

/// True when the macros consult [`crate::print::PRINT_CONTROL`] at run time.
pub const RUNTIME_PRINT_LEVEL: bool = cfg!(feature = "runtime-print-level");

/// Compile-time print threshold.
///
/// Cargo features are additive, so when several `print-level-*` features are
/// enabled the most verbose one wins. Without any of them the threshold is
/// [`PrintLevel::Warn`].
pub const PRINT_LEVEL: PrintLevel = if cfg!(feature = "print-level-all") {
    PrintLevel::All
} else if cfg!(feature = "print-level-debug") {
    PrintLevel::Debug
} else if cfg!(feature = "print-level-info") {
    PrintLevel::Info
} else if cfg!(feature = "print-level-warn") {
    PrintLevel::Warn
} else if cfg!(feature = "print-level-none") {
    PrintLevel::None
} else {
    PrintLevel::Warn
};

/// `print-scope-areaNN` features, indexed by area.
const SCOPE_FEATURES: [bool; 16] = [
    cfg!(feature = "print-scope-area00"),
    cfg!(feature = "print-scope-area01"),
    cfg!(feature = "print-scope-area02"),
    cfg!(feature = "print-scope-area03"),
    cfg!(feature = "print-scope-area04"),
    cfg!(feature = "print-scope-area05"),
    cfg!(feature = "print-scope-area06"),
    cfg!(feature = "print-scope-area07"),
    cfg!(feature = "print-scope-area08"),
    cfg!(feature = "print-scope-area09"),
    cfg!(feature = "print-scope-area10"),
    cfg!(feature = "print-scope-area11"),
    cfg!(feature = "print-scope-area12"),
    cfg!(feature = "print-scope-area13"),
    cfg!(feature = "print-scope-area14"),
    cfg!(feature = "print-scope-area15"),
];

/// Mask of the selected areas, or every area when none is selected.
const fn scope_from_areas(areas: &[bool; 16]) -> PrintScope {
    let mut bits = 0u16;
    let mut i = 0;
    while i < areas.len() {
        if areas[i] {
            bits |= 1 << i;
        }
        i += 1;
    }
    if bits == 0 { PrintScope::ALL } else { PrintScope::from_bits(bits) }
}

/// Compile-time scope mask.
///
/// The union of the enabled `print-scope-areaNN` features, or
/// [`PrintScope::ALL`] without any. Also the initial scope of
/// [`crate::print::PRINT_CONTROL`].
pub const PRINT_SCOPE: PrintScope = scope_from_areas(&SCOPE_FEATURES);

/// Maximum formatted message length handed to a sink, in bytes.
/// Longer messages are truncated.
pub const PRINT_MSG_LEN: usize = 128;

// =============================================================================
// Log Buffer
// =============================================================================

/// Number of messages retained by [`crate::print::LogBuffer`].
pub const LOG_ENTRIES: usize = 16;

/// Maximum characters kept per log buffer entry.
pub const LOG_MSG_LEN: usize = 64;

const _: () = assert!(LOG_ENTRIES > 0);
const _: () = assert!(LOG_MSG_LEN > 1);
const _: () = assert!(LOG_MSG_LEN <= PRINT_MSG_LEN);

// =============================================================================
// Byte Order
// =============================================================================

#[cfg(all(feature = "big-endian", feature = "little-endian"))]
compile_error!("features `big-endian` and `little-endian` are mutually exclusive");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_match_features() {
        assert_eq!(DEBUG_PRINT, cfg!(feature = "debug-print"));
        assert_eq!(RUNTIME_PRINT_LEVEL, cfg!(feature = "runtime-print-level"));
    }

    #[test]
    #[cfg(not(any(
        feature = "print-level-none",
        feature = "print-level-warn",
        feature = "print-level-info",
        feature = "print-level-debug",
        feature = "print-level-all"
    )))]
    fn test_default_print_level_is_warn() {
        assert_eq!(PRINT_LEVEL, PrintLevel::Warn);
    }

    #[test]
    fn test_scope_follows_area_features() {
        let selected = SCOPE_FEATURES
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(0u16, |bits, (i, _)| bits | (1 << i));
        if selected == 0 {
            assert_eq!(PRINT_SCOPE, PrintScope::ALL);
        } else {
            assert_eq!(PRINT_SCOPE.bits(), selected);
        }
    }

    #[test]
    fn test_scope_from_areas() {
        assert_eq!(scope_from_areas(&[false; 16]), PrintScope::ALL);

        let mut areas = [false; 16];
        areas[2] = true;
        areas[15] = true;
        assert_eq!(scope_from_areas(&areas), PrintScope::AREA02 | PrintScope::AREA15);
    }
}
