//! Injected print interface.
//!
//! [`Printer`] bundles a [`PrintControl`] and a [`PrintSink`] so code can be
//! handed its logging context explicitly instead of reaching for globals.
//! It applies the same gate as the macros and honors `debug-print` the same
//! way: without the feature every call returns `false` before formatting
//! and nothing reaches the sink. Unlike the macros it cannot skip argument
//! evaluation, since `format_args!` evaluates at the call site.

use core::fmt;

use super::gate;
use crate::config;
use super::sink::{Message, format_message};
use super::{PrintControl, PrintScope, PrintSink, Verbosity};

/// Gated writer over an explicit control block and sink.
#[derive(Clone, Copy)]
pub struct Printer<'a> {
    control: &'a PrintControl,
    sink: &'a dyn PrintSink,
}

impl<'a> Printer<'a> {
    pub const fn new(
        control: &'a PrintControl,
        sink: &'a dyn PrintSink,
    ) -> Self {
        Self { control, sink }
    }

    #[inline]
    pub const fn control(&self) -> &'a PrintControl { self.control }

    /// True if an unscoped call tagged `tag` would be emitted right now.
    #[inline]
    pub fn enabled(
        &self,
        tag: Verbosity,
    ) -> bool {
        config::DEBUG_PRINT && gate::admits(self.control.level(), tag)
    }

    /// True if a scoped call would be emitted right now.
    #[inline]
    pub fn enabled_scoped(
        &self,
        scope: PrintScope,
        tag: Verbosity,
    ) -> bool {
        config::DEBUG_PRINT
            && gate::admits_scoped(self.control.level(), self.control.scope(), tag, scope)
    }

    /// Emit an unscoped message if the threshold admits `tag`.
    ///
    /// Returns whether the message reached the sink.
    pub fn emit(
        &self,
        tag: Verbosity,
        args: fmt::Arguments<'_>,
    ) -> bool {
        if !self.enabled(tag) {
            return false;
        }
        self.write(tag, args);
        true
    }

    /// Emit a scoped message if `scope` is active and the threshold admits `tag`.
    pub fn scoped(
        &self,
        scope: PrintScope,
        tag: Verbosity,
        args: fmt::Arguments<'_>,
    ) -> bool {
        if !self.enabled_scoped(scope, tag) {
            return false;
        }
        self.write(tag, args);
        true
    }

    /// Emit regardless of level.
    #[inline]
    pub fn print(
        &self,
        args: fmt::Arguments<'_>,
    ) -> bool {
        self.emit(Verbosity::Always, args)
    }

    #[inline]
    pub fn warn(
        &self,
        args: fmt::Arguments<'_>,
    ) -> bool {
        self.emit(Verbosity::Warn, args)
    }

    #[inline]
    pub fn info(
        &self,
        args: fmt::Arguments<'_>,
    ) -> bool {
        self.emit(Verbosity::Info, args)
    }

    #[inline]
    pub fn debug(
        &self,
        args: fmt::Arguments<'_>,
    ) -> bool {
        self.emit(Verbosity::Debug, args)
    }

    #[inline]
    pub fn verbose(
        &self,
        args: fmt::Arguments<'_>,
    ) -> bool {
        self.emit(Verbosity::Verbose, args)
    }

    fn write(
        &self,
        tag: Verbosity,
        args: fmt::Arguments<'_>,
    ) {
        let msg: Message = format_message(args);
        self.sink.write(tag, &msg);
    }
}

impl fmt::Debug for Printer<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Printer").field("control", self.control).finish_non_exhaustive()
    }
}
