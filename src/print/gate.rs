//! Emission decisions.
//!
//! Pure functions of the threshold, the active scope and the call site. The
//! macros, [`super::Printer`] and tests all go through these two functions.

use super::{PrintLevel, PrintScope, Verbosity};

/// Decide whether an unscoped call tagged `tag` is emitted under `threshold`.
#[inline]
pub const fn admits(
    threshold: PrintLevel,
    tag: Verbosity,
) -> bool {
    let t = threshold.as_raw();
    match tag {
        Verbosity::Always => true,
        Verbosity::Warn => t <= PrintLevel::Warn.as_raw(),
        Verbosity::Info => t <= PrintLevel::Info.as_raw(),
        Verbosity::Debug => t <= PrintLevel::Debug.as_raw(),
        Verbosity::Verbose => t == PrintLevel::All.as_raw(),
    }
}

/// Decide whether a scoped call is emitted.
///
/// The call's scope must share an area with `active_scope`; the level test
/// then applies as for [`admits`]. `Verbosity::Always` checks scope only.
#[inline]
pub const fn admits_scoped(
    threshold: PrintLevel,
    active_scope: PrintScope,
    tag: Verbosity,
    scope: PrintScope,
) -> bool {
    scope.intersects(active_scope) && admits(threshold, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: [Verbosity; 5] = [
        Verbosity::Always,
        Verbosity::Warn,
        Verbosity::Info,
        Verbosity::Debug,
        Verbosity::Verbose,
    ];

    /// Expected admissions per threshold, in `TAGS` order.
    fn expected(threshold: PrintLevel) -> [bool; 5] {
        match threshold {
            PrintLevel::None => [true, false, false, false, false],
            PrintLevel::Warn => [true, true, false, false, false],
            PrintLevel::Info => [true, true, true, false, false],
            PrintLevel::Debug => [true, true, true, true, false],
            PrintLevel::All => [true, true, true, true, true],
        }
    }

    #[test]
    fn test_level_table() {
        for threshold in PrintLevel::ALL_LEVELS {
            let got = TAGS.map(|tag| admits(threshold, tag));
            assert_eq!(got, expected(threshold), "threshold {threshold:?}");
        }
    }

    #[test]
    fn test_info_threshold() {
        assert!(admits(PrintLevel::Info, Verbosity::Warn));
        assert!(admits(PrintLevel::Info, Verbosity::Info));
        assert!(!admits(PrintLevel::Info, Verbosity::Debug));
        assert!(!admits(PrintLevel::Info, Verbosity::Verbose));
    }

    #[test]
    fn test_scoped_requires_intersection() {
        let active = PrintScope::AREA02 | PrintScope::AREA09;
        for tag in TAGS {
            assert!(!admits_scoped(PrintLevel::All, active, tag, PrintScope::AREA03));
            assert!(admits_scoped(PrintLevel::All, active, tag, PrintScope::AREA09));
        }
    }

    #[test]
    fn test_scoped_always_ignores_level() {
        assert!(admits_scoped(PrintLevel::None, PrintScope::ALL, Verbosity::Always, PrintScope::AREA00));
        assert!(!admits_scoped(PrintLevel::None, PrintScope::NONE, Verbosity::Always, PrintScope::AREA00));
    }

    #[test]
    fn test_scoped_level_and_scope_both_apply() {
        let active = PrintScope::AREA05;
        assert!(admits_scoped(PrintLevel::Debug, active, Verbosity::Debug, PrintScope::AREA05));
        assert!(!admits_scoped(PrintLevel::Info, active, Verbosity::Debug, PrintScope::AREA05));
        assert!(!admits_scoped(PrintLevel::Debug, active, Verbosity::Verbose, PrintScope::AREA05));
        assert!(admits_scoped(PrintLevel::All, active, Verbosity::Verbose, PrintScope::ALL));
    }

    #[test]
    fn test_scoped_matches_unscoped_when_all_areas_active() {
        for threshold in PrintLevel::ALL_LEVELS {
            for tag in TAGS {
                assert_eq!(
                    admits_scoped(threshold, PrintScope::ALL, tag, PrintScope::ALL),
                    admits(threshold, tag)
                );
            }
        }
    }
}
