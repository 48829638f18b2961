//! Portable type aliases and allocation alignment units.
//!
//! # Alignment Units
//!
//! There is no portable way to learn the strictest alignment a target
//! needs. Two stand-ins are provided:
//!
//! - [`NATIVE_ALIGNMENT`]: pointer size (4 on Cortex-M, 8 on 64-bit hosts)
//! - [`MAX_DATATYPE_SIZE`]: size of a union over every primitive scalar,
//!   which is enough to hold any of them (`long double` excluded)
//!
//! Round allocation sizes up to one of these when a buffer must be able to
//! host arbitrarily-typed data.

use core::ffi::{c_int, c_long, c_longlong, c_void};
use core::mem::size_of;

// =============================================================================
// Function Pointer Aliases
// =============================================================================

/// Takes nothing, returns nothing.
pub type VoidFn = fn();

/// Takes an `int`, returns nothing.
pub type IntArgFn = fn(c_int);

/// Takes nothing, returns an `int`.
pub type IntRetFn = fn() -> c_int;

/// Takes an untyped pointer, returns nothing.
pub type PtrArgFn = fn(*mut c_void);

/// Takes an untyped pointer, returns an untyped pointer.
pub type PtrRetFn = fn(*mut c_void) -> *mut c_void;

// =============================================================================
// Null Pointers
// =============================================================================

/// Null untyped pointer.
pub const NULL: *const c_void = core::ptr::null();

/// Null untyped mutable pointer.
pub const NULL_MUT: *mut c_void = core::ptr::null_mut();

// =============================================================================
// Alignment Units
// =============================================================================

/// Size of a data pointer on the target.
pub const NATIVE_ALIGNMENT: usize = size_of::<*const c_void>();
pub const NATIVE_ALIGNMENT_MASK: usize = NATIVE_ALIGNMENT - 1;

/// Union of the primitive scalar types; only its size is used.
#[repr(C)]
#[allow(dead_code)]
pub union MaxDataType {
    i: c_int,
    l: c_long,
    ll: c_longlong,
    p: *mut c_void,
    fp: VoidFn,
    f: f32,
    d: f64,
}

/// Size of the largest primitive scalar on the target.
pub const MAX_DATATYPE_SIZE: usize = size_of::<MaxDataType>();
pub const MAX_DATATYPE_SIZE_MASK: usize = MAX_DATATYPE_SIZE - 1;

// The mask arithmetic below needs both units to be powers of two.
const _: () = assert!(NATIVE_ALIGNMENT.is_power_of_two());
const _: () = assert!(MAX_DATATYPE_SIZE.is_power_of_two());
const _: () = assert!(MAX_DATATYPE_SIZE >= NATIVE_ALIGNMENT);

/// Round `nbytes` up to a multiple of [`NATIVE_ALIGNMENT`].
///
/// Wraps to 0 within one unit of `usize::MAX`, like [`Align::align_up_pow2`].
///
/// [`Align::align_up_pow2`]: crate::align::Align::align_up_pow2
#[inline]
pub const fn round_up_native_alignment(nbytes: usize) -> usize {
    nbytes.wrapping_add(NATIVE_ALIGNMENT_MASK) & !NATIVE_ALIGNMENT_MASK
}

/// Round `nbytes` up to a multiple of [`MAX_DATATYPE_SIZE`]. Wraps the same
/// way as [`round_up_native_alignment`].
#[inline]
pub const fn round_up_datatype_size(nbytes: usize) -> usize {
    nbytes.wrapping_add(MAX_DATATYPE_SIZE_MASK) & !MAX_DATATYPE_SIZE_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Align;

    fn noop() {}
    fn identity(p: *mut c_void) -> *mut c_void { p }

    #[test]
    fn test_fn_aliases() {
        let f: VoidFn = noop;
        f();
        let g: PtrRetFn = identity;
        assert!(g(NULL_MUT).is_null());
        let h: IntRetFn = || 7;
        assert_eq!(h(), 7);
    }

    #[test]
    fn test_null_constants() {
        assert!(NULL.is_null());
        assert!(NULL_MUT.is_null());
    }

    #[test]
    fn test_units() {
        assert_eq!(NATIVE_ALIGNMENT, size_of::<usize>());
        assert!(MAX_DATATYPE_SIZE >= size_of::<f64>());
        assert!(MAX_DATATYPE_SIZE >= size_of::<c_longlong>());
    }

    #[test]
    fn test_round_up_native() {
        assert_eq!(round_up_native_alignment(0), 0);
        assert_eq!(round_up_native_alignment(1), NATIVE_ALIGNMENT);
        assert_eq!(round_up_native_alignment(NATIVE_ALIGNMENT), NATIVE_ALIGNMENT);
        assert_eq!(round_up_native_alignment(NATIVE_ALIGNMENT + 1), 2 * NATIVE_ALIGNMENT);
    }

    #[test]
    fn test_round_up_near_max_wraps() {
        let top = usize::MAX & !NATIVE_ALIGNMENT_MASK;
        assert_eq!(round_up_native_alignment(top), top);
        assert_eq!(round_up_native_alignment(top + 1), 0);
        assert_eq!(round_up_native_alignment(usize::MAX), 0);
        assert_eq!(round_up_datatype_size(usize::MAX), 0);
        assert_eq!(round_up_datatype_size(usize::MAX), usize::MAX.align_up_pow2(MAX_DATATYPE_SIZE));
    }

    #[test]
    fn test_round_up_datatype_matches_align() {
        for n in 0..100usize {
            assert_eq!(round_up_datatype_size(n), n.align_up_pow2(MAX_DATATYPE_SIZE));
        }
    }
}
