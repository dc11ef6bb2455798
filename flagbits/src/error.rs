//! Error types for flag set operations.

use core::fmt;

/// What made a flag layout invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFault {
    /// Two members share the same bit position.
    DuplicatePosition,
    /// A member's position does not fit in 64 bits.
    PositionOutOfRange,
}

/// Flag type failed layout validation.
///
/// Signals a broken flag type, not bad input data - expected to surface
/// in development, never at runtime against a correct type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLayout {
    /// Name of the offending flag type.
    pub type_name: &'static str,
    /// The position that triggered the fault.
    pub position: u32,
    /// What was wrong with it.
    pub fault: LayoutFault,
}

impl fmt::Display for InvalidLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fault {
            LayoutFault::DuplicatePosition => write!(
                f,
                "flag type '{}': duplicate position {}",
                self.type_name, self.position
            ),
            LayoutFault::PositionOutOfRange => write!(
                f,
                "flag type '{}': position {} exceeds 63",
                self.type_name, self.position
            ),
        }
    }
}

/// Raw value contains bits with no corresponding flag.
///
/// The persisted integer is corrupt or comes from an incompatible schema
/// version; the decode is abandoned whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownBits {
    /// Name of the flag type the value was decoded against.
    pub type_name: &'static str,
    /// The raw value as passed in.
    pub value: u64,
    /// The set bits that mapped to no flag.
    pub unknown: u64,
}

impl fmt::Display for UnknownBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {} has unknown bits {:#x} for flag type '{}'",
            self.value, self.unknown, self.type_name
        )
    }
}

/// Any failure while decoding a raw integer into a flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The flag type itself is invalid.
    InvalidLayout(InvalidLayout),
    /// The raw value has bits no flag accounts for.
    UnknownBits(UnknownBits),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidLayout(err) => err.fmt(f),
            DecodeError::UnknownBits(err) => err.fmt(f),
        }
    }
}

impl From<InvalidLayout> for DecodeError {
    fn from(err: InvalidLayout) -> Self {
        DecodeError::InvalidLayout(err)
    }
}

impl From<UnknownBits> for DecodeError {
    fn from(err: UnknownBits) -> Self {
        DecodeError::UnknownBits(err)
    }
}
