//! Alignment rounding for unsigned integers.
//!
//! Two forms of each operation:
//!
//! - `align_up` / `floor_to` divide, so any non-zero alignment works
//! - `align_up_pow2` / `floor_pow2` mask, and need a power-of-two alignment
//!
//! The power-of-two requirement is only checked by `debug_assert!`; release
//! builds return garbage for other values. Rounding up wraps on overflow.
//!
//! ```
//! use ucutil::align::Align;
//!
//! assert_eq!(13u32.align_up_pow2(8), 16);
//! assert_eq!(13u32.align_up(6), 18);
//! assert_eq!(13u32.floor_pow2(8), 8);
//! ```

/// Rounding to a multiple of an alignment.
pub trait Align: Copy {
    /// Smallest multiple of `align` that is `>= self`.
    fn align_up(
        self,
        align: Self,
    ) -> Self;

    /// [`Self::align_up`] for power-of-two `align`, using a mask.
    fn align_up_pow2(
        self,
        align: Self,
    ) -> Self;

    /// Largest multiple of `align` that is `<= self`.
    fn floor_to(
        self,
        align: Self,
    ) -> Self;

    /// [`Self::floor_to`] for power-of-two `align`, using a mask.
    fn floor_pow2(
        self,
        align: Self,
    ) -> Self;

    /// Alias of [`Self::align_up`].
    #[inline]
    fn ceil_to(
        self,
        align: Self,
    ) -> Self {
        self.align_up(align)
    }

    /// Alias of [`Self::align_up_pow2`].
    #[inline]
    fn ceil_pow2(
        self,
        align: Self,
    ) -> Self {
        self.align_up_pow2(align)
    }

    /// True if `self` is a multiple of power-of-two `align`.
    fn is_aligned_pow2(
        self,
        align: Self,
    ) -> bool;
}

macro_rules! impl_align {
    ($($t:ty),*) => {$(
        impl Align for $t {
            #[inline]
            fn align_up(self, align: Self) -> Self {
                (self.wrapping_add(align - 1) / align) * align
            }

            #[inline]
            fn align_up_pow2(self, align: Self) -> Self {
                debug_assert!(align.is_power_of_two());
                self.wrapping_add(align - 1) & !(align - 1)
            }

            #[inline]
            fn floor_to(self, align: Self) -> Self {
                (self / align) * align
            }

            #[inline]
            fn floor_pow2(self, align: Self) -> Self {
                debug_assert!(align.is_power_of_two());
                self & !(align - 1)
            }

            #[inline]
            fn is_aligned_pow2(self, align: Self) -> bool {
                debug_assert!(align.is_power_of_two());
                self & (align - 1) == 0
            }
        }
    )*};
}

impl_align!(u8, u16, u32, u64, u128, usize);

/// `const` form of [`Align::align_up_pow2`] for `usize`, for sizing statics.
#[inline]
pub const fn align_up_usize(
    val: usize,
    align: usize,
) -> usize {
    debug_assert!(align.is_power_of_two());
    val.wrapping_add(align - 1) & !(align - 1)
}
