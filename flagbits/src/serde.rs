//! Serde support: a `BitField` serializes as its raw `u64`.
//!
//! Deserialization routes through [`BitField::from_bits`], so corrupt or
//! foreign integers are rejected with the same diagnostics as a direct
//! decode.

use serde::de::{Deserialize, Deserializer, Error};
use serde::ser::{Serialize, Serializer};

use crate::field::BitField;
use crate::flag::BitFlag;

impl<T: BitFlag> Serialize for BitField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de, T: BitFlag> Deserialize<'de> for BitField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u64::deserialize(deserializer)?;
        BitField::from_bits(bits).map_err(D::Error::custom)
    }
}
