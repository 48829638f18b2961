//! Single-bit manipulation on primitive integers.
//!
//! All operations return a new value; none mutate. Bit indices are
//! zero-based and must be below the type's width (shifts past the width
//! panic in debug builds).

/// Bit get/set/clear and parity helpers.
pub trait Bits: Copy {
    /// Bit `n` as `0` or `1`.
    fn bit_get(
        self,
        n: u32,
    ) -> Self;

    /// `self` with bit `n` set.
    fn bit_set(
        self,
        n: u32,
    ) -> Self;

    /// `self` with bit `n` cleared.
    fn bit_clear(
        self,
        n: u32,
    ) -> Self;

    /// Shift right by `shift`, or left by `-shift` when negative.
    fn bit_shift(
        self,
        shift: i32,
    ) -> Self;

    fn is_odd(self) -> bool;

    #[inline]
    fn is_even(self) -> bool { !self.is_odd() }
}

macro_rules! impl_bits {
    ($($t:ty),*) => {$(
        impl Bits for $t {
            #[inline]
            fn bit_get(self, n: u32) -> Self { (self >> n) & 1 }

            #[inline]
            fn bit_set(self, n: u32) -> Self { self | (1 << n) }

            #[inline]
            fn bit_clear(self, n: u32) -> Self { self & !(1 << n) }

            #[inline]
            fn bit_shift(self, shift: i32) -> Self {
                if shift >= 0 {
                    self >> shift.unsigned_abs()
                } else {
                    self << shift.unsigned_abs()
                }
            }

            #[inline]
            fn is_odd(self) -> bool { self & 1 == 1 }
        }
    )*};
}

impl_bits!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
