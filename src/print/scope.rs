//! Print scopes: a 16-bit mask splitting call sites into areas that can be
//! switched on and off independently.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Scope bitmask. Each of the 16 bits is one area.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct PrintScope(u16);

impl PrintScope {
    /// No area.
    pub const NONE: Self = Self(0x0000);
    /// Every area.
    pub const ALL: Self = Self(0xFFFF);

    pub const AREA00: Self = Self::area(0);
    pub const AREA01: Self = Self::area(1);
    pub const AREA02: Self = Self::area(2);
    pub const AREA03: Self = Self::area(3);
    pub const AREA04: Self = Self::area(4);
    pub const AREA05: Self = Self::area(5);
    pub const AREA06: Self = Self::area(6);
    pub const AREA07: Self = Self::area(7);
    pub const AREA08: Self = Self::area(8);
    pub const AREA09: Self = Self::area(9);
    pub const AREA10: Self = Self::area(10);
    pub const AREA11: Self = Self::area(11);
    pub const AREA12: Self = Self::area(12);
    pub const AREA13: Self = Self::area(13);
    pub const AREA14: Self = Self::area(14);
    pub const AREA15: Self = Self::area(15);

    /// Scope for a single area index (0..16).
    ///
    /// # Panics
    /// In const context, fails to compile when `index >= 16`.
    pub const fn area(index: u8) -> Self {
        assert!(index < 16, "scope area index out of range");
        Self(1 << index)
    }

    #[inline]
    pub const fn from_bits(bits: u16) -> Self { Self(bits) }

    #[inline]
    pub const fn bits(self) -> u16 { self.0 }

    /// True when the two masks share at least one area.
    #[inline]
    pub const fn intersects(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn contains(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn union(
        self,
        other: Self,
    ) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }
}

impl BitOr for PrintScope {
    type Output = Self;

    fn bitor(
        self,
        rhs: Self,
    ) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for PrintScope {
    fn bitor_assign(
        &mut self,
        rhs: Self,
    ) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PrintScope {
    type Output = Self;

    fn bitand(
        self,
        rhs: Self,
    ) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for PrintScope {
    type Output = Self;

    fn not(self) -> Self { Self(!self.0) }
}

impl From<u16> for PrintScope {
    fn from(bits: u16) -> Self { Self(bits) }
}

impl From<PrintScope> for u16 {
    fn from(scope: PrintScope) -> Self { scope.0 }
}
