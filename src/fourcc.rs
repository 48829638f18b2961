//! Four-character codes.
//!
//! Packs four ASCII characters into a `u32` so binary headers carry a
//! readable tag. The first character lands in the lowest byte, so the code
//! reads correctly in a little-endian hex dump:
//!
//! ```
//! use ucutil::fourcc;
//!
//! let magic = fourcc(b'R', b'I', b'F', b'F');
//! assert_eq!(magic.to_le_bytes(), *b"RIFF");
//! ```

use core::fmt;

/// Pack four characters, `c1` in bits 0..8 through `c4` in bits 24..32.
#[inline]
pub const fn fourcc(
    c1: u8,
    c2: u8,
    c3: u8,
    c4: u8,
) -> u32 {
    (c4 as u32) << 24 | (c3 as u32) << 16 | (c2 as u32) << 8 | c1 as u32
}

/// A packed four-character code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct FourCc(u32);

impl FourCc {
    #[inline]
    pub const fn new(
        c1: u8,
        c2: u8,
        c3: u8,
        c4: u8,
    ) -> Self {
        Self(fourcc(c1, c2, c3, c4))
    }

    /// From characters in reading order, e.g. `FourCc::from_bytes(*b"WAVE")`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self { Self(u32::from_le_bytes(bytes)) }

    /// Characters in reading order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] { self.0.to_le_bytes() }

    #[inline]
    pub const fn as_u32(self) -> u32 { self.0 }
}

impl From<u32> for FourCc {
    fn from(raw: u32) -> Self { Self(raw) }
}

impl From<FourCc> for u32 {
    fn from(code: FourCc) -> Self { code.0 }
}

/// Prints the four characters; non-printable bytes show as `.`.
impl fmt::Display for FourCc {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for b in self.to_bytes() {
            let c = if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' };
            fmt::Write::write_char(f, c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FourCc {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "FourCc(\"{self}\" = {:#010x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_positions() {
        let code = fourcc(b'a', b'b', b'c', b'd');
        let bytes = code.to_le_bytes();
        assert_eq!(bytes, [b'a', b'b', b'c', b'd']);
        assert_eq!(code, 0x6463_6261);
    }

    #[test]
    fn test_unpack_recovers_inputs() {
        let inputs = [0x00, 0x7F, 0x80, 0xFF];
        let code = fourcc(inputs[0], inputs[1], inputs[2], inputs[3]);
        for (k, &c) in inputs.iter().enumerate() {
            assert_eq!(((code >> (8 * k)) & 0xFF) as u8, c);
        }
    }

    #[test]
    fn test_newtype_matches_fn() {
        assert_eq!(FourCc::from_bytes(*b"WAVE").as_u32(), fourcc(b'W', b'A', b'V', b'E'));
        assert_eq!(FourCc::new(b'f', b'm', b't', b' ').to_bytes(), *b"fmt ");
    }

    #[test]
    fn test_display() {
        assert_eq!(FourCc::from_bytes(*b"fmt ").to_string(), "fmt ");
        assert_eq!(FourCc::from_bytes([b'A', 0, b'B', 0xFF]).to_string(), "A.B.");
        assert_eq!(format!("{:?}", FourCc::from_bytes(*b"RIFF")), "FourCc(\"RIFF\" = 0x46464952)");
    }
}
