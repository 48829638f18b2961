//! Gated print macros.
//!
//! | Macro      | Emits when                      |
//! |------------|---------------------------------|
//! | `dprint!`  | always                          |
//! | `dprintw!` | threshold is `Warn` or lower    |
//! | `dprinti!` | threshold is `Info` or lower    |
//! | `dprintd!` | threshold is `Debug` or lower   |
//! | `dprintv!` | threshold is `All`              |
//!
//! The `sprint*!` variants take a scope first (a [`PrintScope`] or a raw
//! `u16` mask) and additionally require it to intersect the active scope.
//! `sprint!` checks the scope only.
//!
//! Without the `debug-print` feature every macro expands to `()`: nothing is
//! generated and no argument is evaluated. With it, the gate runs before
//! the arguments are formatted.
//!
//! [`PrintScope`]: crate::print::PrintScope

#[cfg(feature = "debug-print")]
#[doc(hidden)]
#[macro_export]
macro_rules! __dprint {
    ($tag:expr, $($arg:tt)+) => {{
        let tag = $tag;
        if $crate::print::gate::admits($crate::print::active_level(), tag) {
            let _ = $crate::print::write_global(tag, ::core::format_args!($($arg)+));
        }
    }};
}

#[cfg(feature = "debug-print")]
#[doc(hidden)]
#[macro_export]
macro_rules! __sprint {
    ($scope:expr, $tag:expr, $($arg:tt)+) => {{
        let tag = $tag;
        let scope: $crate::print::PrintScope = ::core::convert::Into::into($scope);
        if $crate::print::gate::admits_scoped(
            $crate::print::active_level(),
            $crate::print::active_scope(),
            tag,
            scope,
        ) {
            let _ = $crate::print::write_global(tag, ::core::format_args!($($arg)+));
        }
    }};
}

// =============================================================================
// Unscoped
// =============================================================================

/// Print regardless of level.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! dprint {
    ($($arg:tt)+) => { $crate::__dprint!($crate::print::Verbosity::Always, $($arg)+) };
}

/// Print if the threshold is `Warn` or lower.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! dprintw {
    ($($arg:tt)+) => { $crate::__dprint!($crate::print::Verbosity::Warn, $($arg)+) };
}

/// Print if the threshold is `Info` or lower.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! dprinti {
    ($($arg:tt)+) => { $crate::__dprint!($crate::print::Verbosity::Info, $($arg)+) };
}

/// Print if the threshold is `Debug` or lower.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! dprintd {
    ($($arg:tt)+) => { $crate::__dprint!($crate::print::Verbosity::Debug, $($arg)+) };
}

/// Print if the threshold is `All`.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! dprintv {
    ($($arg:tt)+) => { $crate::__dprint!($crate::print::Verbosity::Verbose, $($arg)+) };
}

// =============================================================================
// Scoped
// =============================================================================

/// Print if `scope` is active, regardless of level.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! sprint {
    ($scope:expr, $($arg:tt)+) => { $crate::__sprint!($scope, $crate::print::Verbosity::Always, $($arg)+) };
}

/// Print if `scope` is active and the threshold is `Warn` or lower.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! sprintw {
    ($scope:expr, $($arg:tt)+) => { $crate::__sprint!($scope, $crate::print::Verbosity::Warn, $($arg)+) };
}

/// Print if `scope` is active and the threshold is `Info` or lower.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! sprinti {
    ($scope:expr, $($arg:tt)+) => { $crate::__sprint!($scope, $crate::print::Verbosity::Info, $($arg)+) };
}

/// Print if `scope` is active and the threshold is `Debug` or lower.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! sprintd {
    ($scope:expr, $($arg:tt)+) => { $crate::__sprint!($scope, $crate::print::Verbosity::Debug, $($arg)+) };
}

/// Print if `scope` is active and the threshold is `All`.
#[cfg(feature = "debug-print")]
#[macro_export]
macro_rules! sprintv {
    ($scope:expr, $($arg:tt)+) => { $crate::__sprint!($scope, $crate::print::Verbosity::Verbose, $($arg)+) };
}

// =============================================================================
// Compiled out
// =============================================================================

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! dprint {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! dprintw {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! dprinti {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! dprintd {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! dprintv {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! sprint {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! sprintw {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! sprinti {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! sprintd {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "debug-print"))]
#[macro_export]
macro_rules! sprintv {
    ($($arg:tt)*) => {
        ()
    };
}
