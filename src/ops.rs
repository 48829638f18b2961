//! Clamping and comparison helpers.
//!
//! Generic over `PartialOrd` so they work for floats as well as integers.
//! For `Ord` types the `core` methods (`Ord::clamp`, `Ord::min`) are
//! equivalent; these exist for mixed code and for `lo > hi`, where
//! `Ord::clamp` panics and [`clip`] returns `hi`.

use core::ops::Neg;

/// Clamp `val` to `[lo, hi]`: `lo` if below, `hi` if above, else `val`.
#[inline]
pub fn clip<T: PartialOrd>(
    val: T,
    lo: T,
    hi: T,
) -> T {
    if val < lo {
        lo
    } else if val > hi {
        hi
    } else {
        val
    }
}

/// Clamp `val` from above only.
#[inline]
pub fn uclip<T: PartialOrd>(
    val: T,
    hi: T,
) -> T {
    if val > hi { hi } else { val }
}

/// Clamp `val` from below only.
#[inline]
pub fn lclip<T: PartialOrd>(
    val: T,
    lo: T,
) -> T {
    if val < lo { lo } else { val }
}

/// Smaller of the two; `y` when they compare equal or unordered.
#[inline]
pub fn min<T: PartialOrd>(
    x: T,
    y: T,
) -> T {
    if x < y { x } else { y }
}

/// Larger of the two; `y` when they compare equal or unordered.
#[inline]
pub fn max<T: PartialOrd>(
    x: T,
    y: T,
) -> T {
    if x > y { x } else { y }
}

/// Absolute value.
///
/// Overflows for the minimum value of a signed integer type.
#[inline]
pub fn abs<T: PartialOrd + Neg<Output = T> + Default>(x: T) -> T {
    if x < T::default() { -x } else { x }
}
