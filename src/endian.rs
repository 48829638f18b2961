//! Host/network byte-order conversion.
//!
//! Network order is big-endian. The host order is chosen with exactly one
//! of the `big-endian` or `little-endian` features:
//!
//! - `big-endian`: conversions are identity
//! - `little-endian`: conversions swap bytes
//!
//! Enabling both is a compile error. Enabling neither leaves these
//! functions undefined, so any caller fails to build rather than sending
//! the wrong byte order.

#[cfg(all(feature = "big-endian", not(feature = "little-endian")))]
mod imp {
    #[inline]
    pub const fn hton16(x: u16) -> u16 { x }

    #[inline]
    pub const fn hton32(x: u32) -> u32 { x }
}

#[cfg(all(feature = "little-endian", not(feature = "big-endian")))]
mod imp {
    #[inline]
    pub const fn hton16(x: u16) -> u16 { x.swap_bytes() }

    #[inline]
    pub const fn hton32(x: u32) -> u32 { x.swap_bytes() }
}

#[cfg(any(feature = "big-endian", feature = "little-endian"))]
pub use imp::{hton16, hton32};

/// Network to host, 16-bit. Same permutation as [`hton16`].
#[cfg(any(feature = "big-endian", feature = "little-endian"))]
#[inline]
pub const fn ntoh16(x: u16) -> u16 { hton16(x) }

/// Network to host, 32-bit. Same permutation as [`hton32`].
#[cfg(any(feature = "big-endian", feature = "little-endian"))]
#[inline]
pub const fn ntoh32(x: u32) -> u32 { hton32(x) }

#[cfg(all(test, any(feature = "big-endian", feature = "little-endian")))]
mod tests {
    use super::*;

    #[test]
    fn test_involution() {
        for x in [0u16, 1, 0x1234, 0xFF00, u16::MAX] {
            assert_eq!(hton16(ntoh16(x)), x);
            assert_eq!(ntoh16(hton16(x)), x);
        }
        for x in [0u32, 1, 0x1234_5678, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(hton32(ntoh32(x)), x);
            assert_eq!(ntoh32(hton32(x)), x);
        }
    }

    #[test]
    #[cfg(feature = "little-endian")]
    fn test_little_endian_swaps() {
        assert_eq!(hton16(0x1234), 0x3412);
        assert_eq!(hton32(0x1234_5678), 0x7856_3412);
    }

    #[test]
    #[cfg(feature = "big-endian")]
    fn test_big_endian_identity() {
        assert_eq!(hton16(0x1234), 0x1234);
        assert_eq!(hton32(0x1234_5678), 0x1234_5678);
    }

    #[test]
    #[cfg(all(feature = "little-endian", target_endian = "little"))]
    fn test_matches_target_order() {
        assert_eq!(hton32(0x0A0B_0C0D).to_ne_bytes(), [0x0A, 0x0B, 0x0C, 0x0D]);
        assert_eq!(hton16(0xBEEF), 0xBEEFu16.to_be());
    }
}
