//! Print levels and call-site verbosity tags.
//!
//! Levels loosely follow syslog: a lower value is more verbose. The active
//! threshold admits every tag at or above it.
//!
//! | Threshold | Admitted tags                    |
//! |-----------|----------------------------------|
//! | `None`    | `Always` only                    |
//! | `Warn`    | `Always`, `Warn`                 |
//! | `Info`    | `Always`, `Warn`, `Info`         |
//! | `Debug`   | `Always`, `Warn`, `Info`, `Debug`|
//! | `All`     | everything                       |

/// Print threshold.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u16)]
pub enum PrintLevel {
    /// Everything, including `Verbose` calls
    All = 0,
    /// `Debug` and above
    Debug = 1,
    /// `Info` and above
    Info = 2,
    /// `Warn` only
    #[default]
    Warn = 3,
    /// All leveled output suppressed
    None = 4,
}

impl PrintLevel {
    /// All levels from most to least verbose.
    pub const ALL_LEVELS: [PrintLevel; 5] = [Self::All, Self::Debug, Self::Info, Self::Warn, Self::None];

    /// Raw numeric value, as stored in [`super::PrintControl`].
    #[inline]
    pub const fn as_raw(self) -> u16 { self as u16 }

    /// Interpret a raw threshold value.
    ///
    /// Values past `None` suppress every leveled message in a plain numeric
    /// comparison, so they map to `None`.
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::All,
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warn,
            _ => Self::None,
        }
    }
}

/// Verbosity tag of a print call site.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Verbosity {
    /// Emitted regardless of the threshold
    Always,
    /// Emitted when the threshold is `Warn` or lower
    Warn,
    /// Emitted when the threshold is `Info` or lower
    Info,
    /// Emitted when the threshold is `Debug` or lower
    Debug,
    /// Emitted only when the threshold is `All`
    Verbose,
}

impl Verbosity {
    /// Single-character prefix for this tag.
    pub const fn prefix(self) -> char {
        match self {
            Self::Always => 'P',
            Self::Warn => 'W',
            Self::Info => 'I',
            Self::Debug => 'D',
            Self::Verbose => 'V',
        }
    }
}
