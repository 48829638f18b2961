//! Error types.

use core::fmt;

/// Result type for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type shared by the fallible containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Error {
    /// Fixed-capacity storage has no free slot
    Full,

    /// Node handle does not refer to a live node
    InvalidNode,
}

impl fmt::Display for Error {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Error::Full => write!(f, "Capacity exhausted"),
            Error::InvalidNode => write!(f, "Invalid node handle"),
        }
    }
}

impl core::error::Error for Error {}
